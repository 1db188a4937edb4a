//! Points in projected (cartesian) coordinates.

use serde::{Deserialize, Serialize};

/// 2d point in a projected coordinate system, e.g. Web Mercator meters or screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Point2d {
    x: f64,
    y: f64,
}

impl Point2d {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to the other point.
    pub fn distance(&self, other: &Point2d) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns the point with both coordinates divided by `factor`. Used to convert map units into
    /// pixels for a given resolution.
    pub fn scaled_down(&self, factor: f64) -> Point2d {
        Point2d::new(self.x / factor, self.y / factor)
    }
}
