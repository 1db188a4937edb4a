//! Raster tile layer and the basemap.at tile sources.

use std::any::Any;

use crate::layer::attribution::Attribution;
use crate::layer::data_provider::UrlSource;
use crate::layer::Layer;
use crate::tile_schema::TileIndex;

mod basemap_at;
pub use basemap_at::BasemapAt;

mod builder;
pub use builder::RasterTileLayerBuilder;

/// Background layer made of prerendered tiles from an Internet source.
///
/// The layer knows where its tiles come from and who provides them. Loading and drawing the tiles
/// is left to the host application.
pub struct RasterTileLayer {
    url_source: Box<dyn UrlSource<TileIndex>>,
    min_zoom: u32,
    max_zoom: u32,
    attribution: Option<Attribution>,
}

impl std::fmt::Debug for RasterTileLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterTileLayer")
            .field("min_zoom", &self.min_zoom)
            .field("max_zoom", &self.max_zoom)
            .field("attribution", &self.attribution)
            .finish()
    }
}

impl RasterTileLayer {
    /// Url of the tile with the given index, or `None` if the index is outside of the zoom range
    /// or the tile grid of its level.
    pub fn tile_url(&self, index: &TileIndex) -> Option<String> {
        if index.z < self.min_zoom || index.z > self.max_zoom {
            return None;
        }

        let tiles_per_side = 1i64 << index.z;
        let in_grid = |v: i32| (0..tiles_per_side).contains(&(v as i64));
        if !in_grid(index.x) || !in_grid(index.y) {
            return None;
        }

        Some((self.url_source)(index))
    }

    /// Lowest zoom level with tiles.
    pub fn min_zoom(&self) -> u32 {
        self.min_zoom
    }

    /// Highest zoom level with tiles.
    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }
}

impl Layer for RasterTileLayer {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_url_checks_range() {
        let layer = RasterTileLayerBuilder::new_rest(|index: &TileIndex| {
            format!("https://tiles.test/{}/{}/{}.png", index.z, index.x, index.y)
        })
        .with_zoom_range(0, 18)
        .build();

        assert_eq!(
            layer.tile_url(&TileIndex::new(1, 0, 1)).as_deref(),
            Some("https://tiles.test/1/1/0.png")
        );
        assert_eq!(layer.tile_url(&TileIndex::new(2, 0, 1)), None);
        assert_eq!(layer.tile_url(&TileIndex::new(-1, 0, 1)), None);
        assert_eq!(layer.tile_url(&TileIndex::new(0, 0, 19)), None);
    }
}
