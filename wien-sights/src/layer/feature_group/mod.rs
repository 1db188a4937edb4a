//! [`ThematicGroup`] is a named set of visual entities that is shown or hidden as a unit.

use std::any::Any;
use std::sync::Arc;

use geojson::FeatureCollection;
use parking_lot::RwLock;

use crate::layer::attribution::Attribution;
use crate::layer::Layer;
use crate::messenger::Messenger;

pub mod cluster;
pub mod entity;
pub mod feature;
pub mod popup;
pub mod symbol;

pub use cluster::{ClusterOptions, MarkerCluster};
pub use entity::{EntityKind, Icon, PathStyle, VisualEntity};
pub use feature::{PropertySource, PropertyValue};
pub use popup::{HtmlTemplate, Popup, PopupField, PopupTemplate};
pub use symbol::{MarkerSymbol, PathSymbol, Symbol};

/// Thematic group shared between the map and the tasks that fill it.
pub type SharedGroup = Arc<RwLock<ThematicGroup>>;

/// Ordered collection of visual entities created from the features of one dataset.
///
/// Entities are only ever added. When a batch of entities is added, the group asks the
/// application to redraw through its messenger.
pub struct ThematicGroup {
    name: String,
    entities: Vec<VisualEntity>,
    clustering: Option<ClusterOptions>,
    attribution: Option<Attribution>,
    messenger: Option<Box<dyn Messenger>>,
}

impl ThematicGroup {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: vec![],
            clustering: None,
            attribution: None,
            messenger: None,
        }
    }

    /// Enables marker clustering for the group.
    pub fn with_clustering(mut self, options: ClusterOptions) -> Self {
        self.clustering = Some(options);
        self
    }

    /// Sets the attribution of the data shown by the group.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Wraps the group to be shared between threads.
    pub fn into_shared(self) -> SharedGroup {
        Arc::new(RwLock::new(self))
    }

    /// Name of the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clustering options, if clustering is enabled.
    pub fn clustering(&self) -> Option<&ClusterOptions> {
        self.clustering.as_ref()
    }

    /// Adds one entity and requests a redraw.
    pub fn insert(&mut self, entity: VisualEntity) {
        self.entities.push(entity);
        self.request_redraw();
    }

    /// Adds all entities in iteration order and requests a single redraw afterwards. Returns the
    /// number of added entities.
    pub fn extend(&mut self, entities: impl IntoIterator<Item = VisualEntity>) -> usize {
        let before = self.entities.len();
        self.entities.extend(entities);
        let added = self.entities.len() - before;

        if added > 0 {
            self.request_redraw();
        }

        added
    }

    /// Number of entities in the group.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the group has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over the entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &VisualEntity> + '_ {
        self.entities.iter()
    }

    /// Returns the entity with the given index.
    pub fn get(&self, index: usize) -> Option<&VisualEntity> {
        self.entities.get(index)
    }

    /// Markers of the group as they should be shown at the given zoom level.
    ///
    /// Without clustering every marker forms its own cluster. Shapes are not included.
    pub fn clusters(&self, zoom: u32) -> Vec<MarkerCluster> {
        let markers = self.entities.iter().enumerate().filter_map(|(id, entity)| {
            entity.icon()?;
            entity.geometry().anchor().map(|anchor| (id, *anchor))
        });

        match &self.clustering {
            Some(options) => cluster::cluster_markers(markers, zoom, options),
            None => cluster::cluster_markers(
                markers,
                zoom,
                &ClusterOptions {
                    max_cluster_radius: 0.0,
                    disable_clustering_at_zoom: None,
                },
            ),
        }
    }

    /// Converts the group content into a GeoJSON feature collection.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.entities.iter().map(VisualEntity::to_feature).collect(),
            foreign_members: None,
        }
    }

    fn request_redraw(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.request_redraw();
        }
    }
}

impl std::fmt::Debug for ThematicGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThematicGroup")
            .field("name", &self.name)
            .field("entities", &self.entities.len())
            .field("clustering", &self.clustering)
            .finish()
    }
}

impl Layer for ThematicGroup {
    fn set_messenger(&mut self, messenger: Box<dyn Messenger>) {
        self.messenger = Some(messenger);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn attribution(&self) -> Option<Attribution> {
        self.attribution.clone()
    }
}
