use super::RasterTileLayer;
use crate::layer::attribution::Attribution;
use crate::layer::data_provider::UrlSource;
use crate::tile_schema::TileIndex;

const DEFAULT_MAX_ZOOM: u32 = 19;

/// Constructor for a [`RasterTileLayer`].
///
/// ```
/// use wien_sights::layer::raster_tile_layer::RasterTileLayerBuilder;
///
/// let layer = RasterTileLayerBuilder::new_rest(|index| {
///     format!(
///         "https://tile.openstreetmap.org/{}/{}/{}.png",
///         index.z, index.x, index.y
///     )
/// })
/// .build();
/// ```
pub struct RasterTileLayerBuilder {
    url_source: Box<dyn UrlSource<TileIndex>>,
    min_zoom: u32,
    max_zoom: u32,
    attribution: Option<Attribution>,
}

impl RasterTileLayerBuilder {
    /// Initializes a builder for a layer that requests tiles from the given url source.
    pub fn new_rest(tile_source: impl UrlSource<TileIndex> + 'static) -> Self {
        Self {
            url_source: Box::new(tile_source),
            min_zoom: 0,
            max_zoom: DEFAULT_MAX_ZOOM,
            attribution: None,
        }
    }

    /// Sets the zoom levels the tile source has tiles for.
    pub fn with_zoom_range(mut self, min_zoom: u32, max_zoom: u32) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the attribution of the tiles.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Consumes the builder and constructs the layer.
    pub fn build(self) -> RasterTileLayer {
        RasterTileLayer {
            url_source: self.url_source,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            attribution: self.attribution,
        }
    }
}
