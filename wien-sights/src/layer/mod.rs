//! [Layers](Layer) hold the content of the map: background tiles or thematic groups of features.

use std::any::Any;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::layer::attribution::Attribution;
use crate::messenger::Messenger;

pub mod attribution;
pub mod data_provider;
pub mod feature_group;
pub mod raster_tile_layer;

pub use feature_group::{SharedGroup, ThematicGroup};
pub use raster_tile_layer::RasterTileLayer;

/// Content of the map.
///
/// There are 2 types of layers:
/// * [`RasterTileLayer`] - background made of prerendered tiles from an Internet source.
/// * [`ThematicGroup`] - a set of visual entities (markers and shapes with popups) created from
///   GeoJSON features.
pub trait Layer: Send + Sync {
    /// Sets the messenger for the layer. Messenger is used to notify the application when the layer
    /// thinks it should be updated on the screen.
    fn set_messenger(&mut self, _messenger: Box<dyn Messenger>) {}
    /// A map stores layers as trait objects. This method can be used to convert the trait object into the concrete type.
    fn as_any(&self) -> &dyn Any;
    /// A map stores layers as trait objects. This method can be used to convert the trait object into the concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Returns the attribution of the layer, if available.
    fn attribution(&self) -> Option<Attribution>;
}

impl<T: Layer + 'static> Layer for Arc<RwLock<T>> {
    fn set_messenger(&mut self, messenger: Box<dyn Messenger>) {
        self.write().set_messenger(messenger)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn attribution(&self) -> Option<Attribution> {
        self.read().attribution()
    }
}
