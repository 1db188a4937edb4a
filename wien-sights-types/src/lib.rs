//! Geometry primitives used by Wien Sights.
//!
//! Features arrive as GeoJSON with WGS84 coordinates. This crate converts them into a small set of
//! typed geometries ([`Geom`]) over [`GeoPoint2d`](geo::GeoPoint2d), and provides the Web Mercator projection needed
//! to measure distances on screen.

pub mod cartesian;
mod contour;
pub mod error;
pub mod geo;
mod geojson;
mod geometry;
mod polygon;

pub use contour::{ClosedContour, Contour};
pub use geometry::{Geom, GeometryKind};
pub use polygon::Polygon;
