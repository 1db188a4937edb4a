use std::sync::Arc;

use crate::dataset::{vienna, DatasetDescriptor, GroupId};
use crate::layer::raster_tile_layer::BasemapAt;
use crate::layer::{Layer, SharedGroup, ThematicGroup};
use crate::map::{Map, MapBuilder};
use crate::messenger::Messenger;

/// Everything the pipelines and the host share: the map, its thematic groups and the datasets
/// that fill them.
///
/// The context is created before any dataset is loaded and lives as long as the application.
pub struct AppContext {
    map: Map,
    groups: [SharedGroup; 5],
    datasets: Vec<Arc<DatasetDescriptor>>,
}

impl AppContext {
    /// Creates a context with one empty thematic group per [`GroupId`], each registered as an
    /// overlay of the map built by `builder`.
    pub fn new(builder: MapBuilder, datasets: Vec<DatasetDescriptor>) -> Self {
        let groups = GroupId::ALL.map(|id| {
            let mut group = ThematicGroup::new(id.name()).with_attribution(vienna::data_attribution());
            if let Some(options) = id.cluster_options() {
                group = group.with_clustering(options);
            }

            group.into_shared()
        });

        let builder = GroupId::ALL
            .iter()
            .zip(&groups)
            .fold(builder, |builder, (id, group)| {
                builder.with_overlay(id.label(), group.clone(), id.visible_by_default())
            });

        Self {
            map: builder.build(),
            groups,
            datasets: datasets.into_iter().map(Arc::new).collect(),
        }
    }

    /// Vienna sightseeing map: centered on Stephansdom at zoom 15 with the basemap.at layers and
    /// the five Vienna datasets. A valid `view_hash` replaces the initial view.
    pub fn vienna(view_hash: Option<&str>) -> Self {
        let builder = BasemapAt::ALL.iter().fold(
            MapBuilder::default()
                .with_position(vienna::stephansdom())
                .with_z_level(vienna::INITIAL_ZOOM),
            |builder, basemap| builder.with_base_layer(basemap.label(), basemap.layer()),
        );

        let mut context = Self::new(builder, vienna::datasets());
        if let Some(hash) = view_hash {
            if !context.map.set_view_from_hash(hash) {
                log::warn!("Invalid view hash {hash:?}, keeping the initial view");
            }
        }

        context
    }

    /// Sets the messenger of the map and of all thematic groups.
    pub fn set_messenger(&mut self, messenger: Arc<dyn Messenger>) {
        for group in &mut self.groups {
            group.set_messenger(Box::new(messenger.clone()));
        }

        self.map.set_messenger(Some(messenger));
    }

    /// The map.
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Mutable reference to the map.
    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    /// Thematic group with the given id.
    pub fn group(&self, id: GroupId) -> &SharedGroup {
        &self.groups[id as usize]
    }

    /// Iterates over all thematic groups with their ids.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &SharedGroup)> + '_ {
        GroupId::ALL.into_iter().zip(self.groups.iter())
    }

    /// Datasets of the context.
    pub fn datasets(&self) -> &[Arc<DatasetDescriptor>] {
        &self.datasets
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use wien_sights_types::geo::GeoPoint;

    use super::*;
    use crate::map::LayerKind;

    #[test]
    fn vienna_layers() {
        let context = AppContext::vienna(None);
        let layers = context.map().layers();

        assert_eq!(layers.len(), 12);
        assert_eq!(layers.active_base(), Some("BasemapAT Grau"));
        assert_eq!(
            layers.labels(LayerKind::Base).collect::<Vec<_>>(),
            vec![
                "BasemapAT Grau",
                "BasemapAT Standard",
                "BasemapAT High-DPI",
                "BasemapAT Gelände",
                "BasemapAT Oberfläche",
                "BasemapAT Orthofoto",
                "BasemapAT Beschriftung",
            ]
        );
        assert_eq!(
            layers.labels(LayerKind::Overlay).collect::<Vec<_>>(),
            vec![
                "Vienna Sightseeing Haltestellen",
                "Vienna Sightseeing Linien",
                "Fußgängerzonen",
                "Sehenswürdigkeiten",
                "Hotels",
            ]
        );

        let visible_overlays: Vec<&str> = (0..layers.len())
            .filter(|&i| layers.kind(i) == Some(LayerKind::Overlay) && layers.is_visible(i))
            .filter_map(|i| layers.label(i))
            .collect();
        assert_eq!(visible_overlays, vec!["Hotels"]);
    }

    #[test]
    fn initial_view() {
        let context = AppContext::vienna(None);
        let view = context.map().view();

        assert_eq!(view.zoom(), 15);
        assert_eq!(view.center().lat(), 48.208493);
        assert_eq!(view.center().lon(), 16.373118);
        assert_eq!(
            context.map().scale_bar().map(|bar| bar.label),
            Some("300 m".to_string())
        );
    }

    #[test]
    fn view_hash_overrides_initial_view() {
        let context = AppContext::vienna(Some("#12/48.19/16.35"));
        assert_eq!(context.map().view().zoom(), 12);

        let context = AppContext::vienna(Some("#12/invalid"));
        assert_eq!(context.map().view().zoom(), 15);
    }

    #[test]
    fn groups_are_shared_with_the_map() {
        let context = AppContext::vienna(None);
        let hotels = context.group(GroupId::Hotels);
        assert_eq!(hotels.read().name(), "hotels");
        assert!(hotels.read().clustering().is_some());
        assert!(context.group(GroupId::Sights).read().clustering().is_none());

        let index = context.map().layers().find("Hotels").expect("layer");
        let layer = context.map().layers()[index]
            .as_any()
            .downcast_ref::<SharedGroup>()
            .expect("thematic group");
        assert!(Arc::ptr_eq(layer, hotels));
    }

    #[test]
    fn groups_notify_messenger() {
        struct Counter(AtomicUsize);
        impl Messenger for Counter {
            fn request_redraw(&self) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
        }

        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut context = AppContext::vienna(None);
        context.set_messenger(counter.clone());

        let stops = vienna::stops::descriptor();
        let feature: geojson::Feature = serde_json::from_str(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[16.37,48.2]},"properties":{"LINE_ID":1}}"#,
        )
        .expect("valid feature");
        let entity = stops.to_entity(&feature).expect("entity");
        context.group(GroupId::Stops).write().extend([entity]);

        assert_eq!(counter.0.load(Ordering::Relaxed), 1);
        assert_eq!(context.groups().count(), 5);
    }
}
