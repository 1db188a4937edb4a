//! Static descriptions of the datasets shown on the map and of the rules turning their features
//! into visual entities.

use std::sync::Arc;

use geojson::Feature;
use wien_sights_types::geo::GeoPoint2d;
use wien_sights_types::Geom;

use crate::layer::feature_group::{ClusterOptions, Popup, PopupTemplate, Symbol, VisualEntity};

pub mod vienna;
mod wfs;

pub use wfs::WfsQuery;

/// Identifier of a thematic group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupId {
    /// Sightseeing bus stops.
    Stops,
    /// Sightseeing bus lines.
    Lines,
    /// Pedestrian zones.
    Zones,
    /// Sights.
    Sights,
    /// Hotels and other accommodation.
    Hotels,
}

impl GroupId {
    /// All groups in the order they appear in the layer control.
    pub const ALL: [GroupId; 5] = [
        GroupId::Stops,
        GroupId::Lines,
        GroupId::Zones,
        GroupId::Sights,
        GroupId::Hotels,
    ];

    /// Short machine-friendly name of the group.
    pub fn name(&self) -> &'static str {
        match self {
            GroupId::Stops => "stops",
            GroupId::Lines => "lines",
            GroupId::Zones => "zones",
            GroupId::Sights => "sights",
            GroupId::Hotels => "hotels",
        }
    }

    /// Label of the group in the layer control.
    pub fn label(&self) -> &'static str {
        match self {
            GroupId::Stops => "Vienna Sightseeing Haltestellen",
            GroupId::Lines => "Vienna Sightseeing Linien",
            GroupId::Zones => "Fußgängerzonen",
            GroupId::Sights => "Sehenswürdigkeiten",
            GroupId::Hotels => "Hotels",
        }
    }

    /// Whether the group is shown when the map opens.
    pub fn visible_by_default(&self) -> bool {
        matches!(self, GroupId::Hotels)
    }

    /// Marker clustering of the group, if any.
    pub fn cluster_options(&self) -> Option<ClusterOptions> {
        match self {
            GroupId::Hotels => Some(ClusterOptions {
                max_cluster_radius: 80.0,
                disable_clustering_at_zoom: Some(17),
            }),
            _ => None,
        }
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a dataset comes from and how its features are shown.
pub struct DatasetDescriptor {
    group: GroupId,
    url: String,
    symbol: Box<dyn Symbol<Feature>>,
    popup: Arc<dyn PopupTemplate>,
}

impl std::fmt::Debug for DatasetDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetDescriptor")
            .field("group", &self.group)
            .field("url", &self.url)
            .finish()
    }
}

impl DatasetDescriptor {
    /// Creates a new descriptor.
    pub fn new(
        group: GroupId,
        url: impl Into<String>,
        symbol: impl Symbol<Feature> + 'static,
        popup: impl PopupTemplate + 'static,
    ) -> Self {
        Self {
            group,
            url: url.into(),
            symbol: Box::new(symbol),
            popup: Arc::new(popup),
        }
    }

    /// Group the entities of the dataset go to.
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// Source url of the dataset.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Turns a feature into a visual entity with its popup.
    ///
    /// Returns `None` (and logs the reason) if the feature has no geometry, its geometry cannot
    /// be converted, or the symbol of the dataset cannot draw it.
    pub fn to_entity(&self, feature: &Feature) -> Option<VisualEntity> {
        let Some(geometry) = &feature.geometry else {
            log::warn!("Skipping {} feature {:?}: no geometry", self.group, feature.id);
            return None;
        };

        let geometry = match Geom::<GeoPoint2d>::try_from(geometry) {
            Ok(geometry) => geometry,
            Err(err) => {
                log::warn!("Skipping {} feature {:?}: {err}", self.group, feature.id);
                return None;
            }
        };

        let Some(kind) = self.symbol.entity_kind(feature, &geometry) else {
            log::warn!(
                "Skipping {} feature {:?}: cannot draw {:?} geometry",
                self.group,
                feature.id,
                geometry.kind()
            );
            return None;
        };

        let popup = Popup::new(
            self.popup.clone(),
            feature.properties.clone().unwrap_or_default(),
        );

        Some(VisualEntity::new(geometry, kind, popup))
    }
}
