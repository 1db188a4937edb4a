use super::{RasterTileLayer, RasterTileLayerBuilder};
use crate::layer::attribution::Attribution;
use crate::tile_schema::TileIndex;

/// Tile sets published by basemap.at, the Austrian administrative base map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasemapAt {
    /// Grey base map.
    Grau,
    /// Standard colored base map.
    Basemap,
    /// Standard base map for high density displays.
    HighDpi,
    /// Terrain shading.
    Terrain,
    /// Surface shading.
    Surface,
    /// Aerial photos.
    Orthofoto,
    /// Labels, to be shown on top of other layers.
    Overlay,
}

impl BasemapAt {
    /// All variants in the order they are offered in the layer control.
    pub const ALL: [BasemapAt; 7] = [
        BasemapAt::Grau,
        BasemapAt::Basemap,
        BasemapAt::HighDpi,
        BasemapAt::Terrain,
        BasemapAt::Surface,
        BasemapAt::Orthofoto,
        BasemapAt::Overlay,
    ];

    /// Label of the variant in the layer control.
    pub fn label(&self) -> &'static str {
        match self {
            BasemapAt::Grau => "BasemapAT Grau",
            BasemapAt::Basemap => "BasemapAT Standard",
            BasemapAt::HighDpi => "BasemapAT High-DPI",
            BasemapAt::Terrain => "BasemapAT Gelände",
            BasemapAt::Surface => "BasemapAT Oberfläche",
            BasemapAt::Orthofoto => "BasemapAT Orthofoto",
            BasemapAt::Overlay => "BasemapAT Beschriftung",
        }
    }

    fn variant(&self) -> &'static str {
        match self {
            BasemapAt::Grau => "bmapgrau",
            BasemapAt::Basemap => "geolandbasemap",
            BasemapAt::HighDpi => "bmaphidpi",
            BasemapAt::Terrain => "bmapgelaende",
            BasemapAt::Surface => "bmapoberflaeche",
            BasemapAt::Orthofoto => "bmaporthofoto30cm",
            BasemapAt::Overlay => "bmapoverlay",
        }
    }

    fn style(&self) -> &'static str {
        match self {
            BasemapAt::Terrain | BasemapAt::Surface => "grau",
            _ => "normal",
        }
    }

    fn format(&self) -> &'static str {
        match self {
            BasemapAt::Grau | BasemapAt::Basemap | BasemapAt::Overlay => "png",
            BasemapAt::HighDpi
            | BasemapAt::Terrain
            | BasemapAt::Surface
            | BasemapAt::Orthofoto => "jpeg",
        }
    }

    fn max_zoom(&self) -> u32 {
        match self {
            BasemapAt::Basemap => 20,
            _ => 19,
        }
    }

    /// Url of the tile with the given index.
    pub fn tile_url(&self, index: &TileIndex) -> String {
        format!(
            "https://mapsneu.wien.gv.at/basemap/{}/{}/google3857/{}/{}/{}.{}",
            self.variant(),
            self.style(),
            index.z,
            index.y,
            index.x,
            self.format()
        )
    }

    /// Creates a raster tile layer for the variant.
    pub fn layer(self) -> RasterTileLayer {
        RasterTileLayerBuilder::new_rest(move |index: &TileIndex| self.tile_url(index))
            .with_zoom_range(0, self.max_zoom())
            .with_attribution(Attribution::new(
                "Datenquelle: basemap.at",
                Some("https://www.basemap.at".to_string()),
            ))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;

    #[test]
    fn tile_urls() {
        let index = TileIndex::new(35748, 22724, 16);
        assert_eq!(
            BasemapAt::Grau.tile_url(&index),
            "https://mapsneu.wien.gv.at/basemap/bmapgrau/normal/google3857/16/22724/35748.png"
        );
        assert_eq!(
            BasemapAt::Terrain.tile_url(&index),
            "https://mapsneu.wien.gv.at/basemap/bmapgelaende/grau/google3857/16/22724/35748.jpeg"
        );
        assert_eq!(
            BasemapAt::Orthofoto.tile_url(&index),
            "https://mapsneu.wien.gv.at/basemap/bmaporthofoto30cm/normal/google3857/16/22724/35748.jpeg"
        );
    }

    #[test]
    fn zoom_range() {
        let index = TileIndex::new(0, 0, 20);
        assert!(BasemapAt::Basemap.layer().tile_url(&index).is_some());
        assert!(BasemapAt::Grau.layer().tile_url(&index).is_none());
    }

    #[test]
    fn layer_has_attribution() {
        let attribution = BasemapAt::Overlay.layer().attribution().expect("attribution");
        assert_eq!(attribution.get_text(), "Datenquelle: basemap.at");
        assert_eq!(attribution.get_url(), Some("https://www.basemap.at"));
    }
}
