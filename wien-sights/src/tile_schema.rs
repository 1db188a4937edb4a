//! Web Mercator tile pyramid used by the background layers and the map view.

/// Resolution (meters per pixel at the equator) of the zoom level 0 of the Web Mercator pyramid
/// with 256 px tiles.
pub const TOP_RESOLUTION: f64 = 156543.03392800014;

/// Index of a tile in the pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// X index, growing to the east.
    pub x: i32,
    /// Y index, growing to the south.
    pub y: i32,
    /// Zoom level.
    pub z: u32,
}

impl TileIndex {
    /// Creates a new index.
    pub fn new(x: i32, y: i32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// Resolution of the Web Mercator pyramid at the given zoom level in projected meters per pixel.
pub fn web_resolution(z: u32) -> f64 {
    TOP_RESOLUTION / 2f64.powi(z as i32)
}
