use wien_sights_types::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};

use crate::tile_schema::web_resolution;

/// Deepest zoom level of the background layers. Views never zoom in further.
pub const MAX_ZOOM: u32 = 20;

/// Geographic center and zoom level of the map.
///
/// The view can be written into and restored from a URL fragment (`#zoom/lat/lon`), so a link to
/// the map opens it at the same place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    center: GeoPoint2d,
    zoom: u32,
}

impl MapView {
    /// Creates a new view. Zoom levels above [`MAX_ZOOM`] are clamped.
    pub fn new(center: GeoPoint2d, zoom: u32) -> Self {
        Self {
            center,
            zoom: zoom.min(MAX_ZOOM),
        }
    }

    /// Center of the view.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Zoom level of the view.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Projected meters per pixel at the view's zoom level.
    pub fn resolution(&self) -> f64 {
        web_resolution(self.zoom)
    }

    /// Returns a copy of the view with the given center.
    pub fn with_center(&self, center: GeoPoint2d) -> Self {
        Self { center, ..*self }
    }

    /// Returns a copy of the view with the given zoom level.
    pub fn with_zoom(&self, zoom: u32) -> Self {
        Self::new(self.center, zoom)
    }

    /// URL fragment representing the view: `#zoom/lat/lon`.
    ///
    /// Coordinates are written with enough decimals to be accurate to about a pixel at the zoom
    /// level.
    pub fn to_hash(&self) -> String {
        let precision = hash_precision(self.zoom);
        format!(
            "#{}/{:.*}/{:.*}",
            self.zoom,
            precision,
            self.center.lat(),
            precision,
            self.center.lon()
        )
    }

    /// Parses the view from a URL fragment. The leading `#` is optional.
    ///
    /// Returns `None` unless the fragment has exactly three `/`-separated parts: an integer zoom
    /// level and two finite coordinates. The zoom level is clamped to [`MAX_ZOOM`].
    pub fn from_hash(hash: &str) -> Option<Self> {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let mut parts = hash.split('/');
        let (Some(zoom), Some(lat), Some(lon), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };

        let zoom = zoom.trim().parse::<u32>().ok()?;
        let lat = lat.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let lon = lon.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;

        Some(Self::new(GeoPoint2d::latlon(lat, lon), zoom))
    }

    /// Replaces the view with the one from the URL fragment. Returns false and keeps the view
    /// unchanged if the fragment is not valid.
    pub fn apply_hash(&mut self, hash: &str) -> bool {
        match Self::from_hash(hash) {
            Some(view) => {
                *self = view;
                true
            }
            None => {
                log::debug!("Ignoring invalid view hash {hash:?}");
                false
            }
        }
    }
}

fn hash_precision(zoom: u32) -> usize {
    if zoom <= 1 {
        0
    } else {
        (zoom as f64).log2().ceil() as usize
    }
}
