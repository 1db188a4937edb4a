use crate::control::{FullscreenControl, ScaleBar, ScaleControl};
use crate::layer::attribution::Attribution;
use crate::messenger::Messenger;
use crate::view::MapView;

mod builder;
mod layer_collection;

pub use builder::MapBuilder;
pub use layer_collection::{LayerCollection, LayerKind};

/// Map specifies a set of layers, the view that should be shown and the controls over it.
pub struct Map {
    view: MapView,
    layers: LayerCollection,
    scale: ScaleControl,
    fullscreen: FullscreenControl,
    messenger: Option<Box<dyn Messenger>>,
}

impl Map {
    /// Creates a new map.
    pub fn new(
        view: MapView,
        layers: LayerCollection,
        messenger: Option<Box<dyn Messenger + 'static>>,
    ) -> Self {
        Self {
            view,
            layers,
            scale: ScaleControl::default(),
            fullscreen: FullscreenControl::default(),
            messenger,
        }
    }

    /// Current view of the map.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Changes the view of the map to the given one.
    pub fn set_view(&mut self, view: MapView) {
        self.view = view;
        self.redraw();
    }

    /// URL fragment of the current view.
    pub fn view_hash(&self) -> String {
        self.view.to_hash()
    }

    /// Changes the view to the one encoded in the URL fragment. Returns false and keeps the view
    /// if the fragment is not valid.
    pub fn set_view_from_hash(&mut self, hash: &str) -> bool {
        let changed = self.view.apply_hash(hash);
        if changed {
            self.redraw();
        }

        changed
    }

    /// Returns the list of map's layers.
    pub fn layers(&self) -> &LayerCollection {
        &self.layers
    }

    /// Returns a mutable reference to the list of map's layers.
    pub fn layers_mut(&mut self) -> &mut LayerCollection {
        &mut self.layers
    }

    /// Attributions of the visible layers, without duplicates.
    pub fn attributions(&self) -> Vec<Attribution> {
        let mut attributions: Vec<Attribution> = vec![];
        for attribution in self.layers.iter_visible().filter_map(|layer| layer.attribution()) {
            if !attributions.contains(&attribution) {
                attributions.push(attribution);
            }
        }

        attributions
    }

    /// Scale control of the map.
    pub fn scale_control(&self) -> &ScaleControl {
        &self.scale
    }

    /// Sets the scale control.
    pub fn set_scale_control(&mut self, scale: ScaleControl) {
        self.scale = scale;
    }

    /// Scale bar for the current view.
    pub fn scale_bar(&self) -> Option<ScaleBar> {
        self.scale.metric_scale(&self.view)
    }

    /// Fullscreen control of the map.
    pub fn fullscreen_control(&self) -> &FullscreenControl {
        &self.fullscreen
    }

    /// Mutable reference to the fullscreen control of the map.
    pub fn fullscreen_control_mut(&mut self) -> &mut FullscreenControl {
        &mut self.fullscreen
    }

    /// Request redraw of the map.
    pub fn redraw(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.request_redraw()
        }
    }

    /// Sets the new event messenger for the map.
    pub fn set_messenger(&mut self, messenger: Option<impl Messenger + 'static>) {
        self.messenger = messenger.map(|m| Box::new(m) as Box<dyn Messenger>);
    }
}
