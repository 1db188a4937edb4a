use wien_sights_types::geo::GeoPoint2d;
use wien_sights_types::latlon;

use super::{LayerCollection, Map};
use crate::control::{FullscreenControl, ScaleControl};
use crate::layer::Layer;
use crate::messenger::Messenger;
use crate::view::MapView;

const DEFAULT_ZOOM: u32 = 4;

/// Convenience type to initialize a [Map].
///
/// The first added base layer is the active one.
///
/// ```
/// use wien_sights::layer::raster_tile_layer::BasemapAt;
/// use wien_sights::MapBuilder;
///
/// let map = MapBuilder::default()
///     .with_latlon(48.208493, 16.373118)
///     .with_z_level(15)
///     .with_base_layer(BasemapAt::Grau.label(), BasemapAt::Grau.layer())
///     .build();
/// ```
#[derive(Default)]
pub struct MapBuilder {
    position: Option<GeoPoint2d>,
    z_level: Option<u32>,
    layers: LayerCollection,
    first_base: Option<String>,
    scale: Option<ScaleControl>,
    fullscreen: Option<FullscreenControl>,
    messenger: Option<Box<dyn Messenger>>,
}

impl MapBuilder {
    /// Sets the center point of the map. Defaults to [0, 0].
    pub fn with_position(mut self, position: GeoPoint2d) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the center point of the map to the given coordinates. Defaults to [0, 0].
    pub fn with_latlon(self, lat: f64, lon: f64) -> Self {
        self.with_position(latlon!(lat, lon))
    }

    /// Sets the zoom level of the map. Defaults to 4.
    pub fn with_z_level(mut self, z_level: u32) -> Self {
        self.z_level = Some(z_level);
        self
    }

    /// Adds a base layer offered in the layer control.
    pub fn with_base_layer(mut self, label: &str, layer: impl Layer + 'static) -> Self {
        if self.first_base.is_none() {
            self.first_base = Some(label.to_string());
        }

        self.layers.push_base(label, layer);
        self
    }

    /// Adds an overlay offered in the layer control.
    pub fn with_overlay(mut self, label: &str, layer: impl Layer + 'static, is_visible: bool) -> Self {
        self.layers.push_overlay(label, layer, is_visible);
        self
    }

    /// Sets the scale control.
    pub fn with_scale_control(mut self, scale: ScaleControl) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the fullscreen control.
    pub fn with_fullscreen_control(mut self, fullscreen: FullscreenControl) -> Self {
        self.fullscreen = Some(fullscreen);
        self
    }

    /// Sets a [messenger](Messenger) implementation to the map.
    pub fn with_messenger(mut self, messenger: impl Messenger + 'static) -> Self {
        self.messenger = Some(Box::new(messenger));
        self
    }

    /// Consumes the builder and creates a map instance.
    ///
    /// If some of the parameters are not specified before calling `build`, they will be set to the
    /// default values.
    pub fn build(self) -> Map {
        let MapBuilder {
            position,
            z_level,
            mut layers,
            first_base,
            scale,
            fullscreen,
            messenger,
        } = self;

        if let Some(label) = first_base {
            layers.select_base(&label);
        }

        let view = MapView::new(
            position.unwrap_or(latlon!(0.0, 0.0)),
            z_level.unwrap_or(DEFAULT_ZOOM),
        );

        let mut map = Map::new(view, layers, messenger);
        if let Some(scale) = scale {
            map.set_scale_control(scale);
        }
        if let Some(fullscreen) = fullscreen {
            *map.fullscreen_control_mut() = fullscreen;
        }

        map
    }
}
