use serde::{Deserialize, Serialize};

use crate::contour::Contour;
use crate::polygon::Polygon;

/// Geometry of a feature.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom<P> {
    /// Single point.
    Point(P),
    /// Set of points.
    MultiPoint(Vec<P>),
    /// Line.
    Contour(Contour<P>),
    /// Set of lines.
    MultiContour(Vec<Contour<P>>),
    /// Polygon.
    Polygon(Polygon<P>),
    /// Set of polygons.
    MultiPolygon(Vec<Polygon<P>>),
}

/// Dimensionality of a geometry. Decides whether a feature is drawn as a marker or as a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Point and multi point.
    Point,
    /// Lines and multi lines.
    Line,
    /// Polygons and multi polygons.
    Polygon,
}

impl<P> Geom<P> {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) | Geom::MultiPoint(_) => GeometryKind::Point,
            Geom::Contour(_) | Geom::MultiContour(_) => GeometryKind::Line,
            Geom::Polygon(_) | Geom::MultiPolygon(_) => GeometryKind::Polygon,
        }
    }

    /// Point a marker for this geometry is anchored at: the point itself, or the first point of a
    /// multi point. Returns `None` for lines, polygons and empty multi points.
    pub fn anchor(&self) -> Option<&P> {
        match self {
            Geom::Point(p) => Some(p),
            Geom::MultiPoint(points) => points.first(),
            _ => None,
        }
    }
}

impl<P> From<P> for Geom<P> {
    fn from(value: P) -> Self {
        Self::Point(value)
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}
