//! Conversion between GeoJSON geometries and [`Geom`].

use ::geojson::{LineStringType, PolygonType, Position, Value};

use crate::contour::{ClosedContour, Contour};
use crate::error::SightsTypesError;
use crate::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};
use crate::geometry::Geom;
use crate::polygon::Polygon;

impl TryFrom<&::geojson::Geometry> for Geom<GeoPoint2d> {
    type Error = SightsTypesError;

    fn try_from(geometry: &::geojson::Geometry) -> Result<Self, Self::Error> {
        Geom::<GeoPoint2d>::try_from(&geometry.value)
    }
}

impl TryFrom<&Value> for Geom<GeoPoint2d> {
    type Error = SightsTypesError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Point(p) => Geom::Point(convert_point(p)?),
            Value::MultiPoint(points) => Geom::MultiPoint(
                points
                    .iter()
                    .map(|p| convert_point(p))
                    .collect::<Result<_, _>>()?,
            ),
            Value::LineString(points) => Geom::Contour(convert_contour(points)?),
            Value::MultiLineString(lines) => Geom::MultiContour(
                lines
                    .iter()
                    .map(|l| convert_contour(l))
                    .collect::<Result<_, _>>()?,
            ),
            Value::Polygon(polygon) => Geom::Polygon(convert_polygon(polygon)?),
            Value::MultiPolygon(mp) => Geom::MultiPolygon(
                mp.iter()
                    .map(|p| convert_polygon(p))
                    .collect::<Result<_, _>>()?,
            ),
            Value::GeometryCollection(_) => {
                return Err(SightsTypesError::Conversion(
                    "geometry collections are not supported".to_string(),
                ))
            }
        })
    }
}

impl From<&Geom<GeoPoint2d>> for Value {
    fn from(geom: &Geom<GeoPoint2d>) -> Self {
        match geom {
            Geom::Point(p) => Value::Point(position(p)),
            Geom::MultiPoint(points) => Value::MultiPoint(points.iter().map(position).collect()),
            Geom::Contour(contour) => Value::LineString(line_string(contour)),
            Geom::MultiContour(contours) => {
                Value::MultiLineString(contours.iter().map(line_string).collect())
            }
            Geom::Polygon(polygon) => Value::Polygon(polygon_rings(polygon)),
            Geom::MultiPolygon(polygons) => {
                Value::MultiPolygon(polygons.iter().map(polygon_rings).collect())
            }
        }
    }
}

fn convert_point(position: &Position) -> Result<GeoPoint2d, SightsTypesError> {
    if position.len() < 2 {
        return Err(SightsTypesError::Conversion(
            "point must contain at least 2 dimensions".to_string(),
        ));
    }

    let point = GeoPoint2d::lonlat(position[0], position[1]);
    if !point.is_valid() {
        return Err(SightsTypesError::Conversion(format!(
            "coordinates out of range: {position:?}"
        )));
    }

    Ok(point)
}

fn convert_contour(line_string: &LineStringType) -> Result<Contour<GeoPoint2d>, SightsTypesError> {
    let is_closed = line_string.len() > 2 && line_string.first() == line_string.last();
    let points = line_string
        .iter()
        .map(convert_point)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Contour::new(points, is_closed))
}

fn convert_ring(ring: &LineStringType) -> Result<ClosedContour<GeoPoint2d>, SightsTypesError> {
    let mut points = ring
        .iter()
        .map(convert_point)
        .collect::<Result<Vec<_>, _>>()?;
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    if points.len() < 3 {
        return Err(SightsTypesError::Conversion(
            "polygon ring must contain at least 3 distinct points".to_string(),
        ));
    }

    Ok(ClosedContour::new(points))
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon<GeoPoint2d>, SightsTypesError> {
    let Some((outer, inner)) = polygon.split_first() else {
        return Err(SightsTypesError::Conversion(
            "polygon has no outer ring".to_string(),
        ));
    };

    Ok(Polygon::new(
        convert_ring(outer)?,
        inner.iter().map(convert_ring).collect::<Result<_, _>>()?,
    ))
}

fn position(point: &GeoPoint2d) -> Position {
    vec![point.lon(), point.lat()]
}

fn line_string(contour: &Contour<GeoPoint2d>) -> LineStringType {
    contour.iter_points().map(position).collect()
}

fn ring(contour: &ClosedContour<GeoPoint2d>) -> LineStringType {
    let mut positions: LineStringType = contour.iter_points().map(position).collect();
    if let Some(first) = positions.first().cloned() {
        positions.push(first);
    }

    positions
}

fn polygon_rings(polygon: &Polygon<GeoPoint2d>) -> PolygonType {
    polygon.iter_contours().map(ring).collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::geometry::GeometryKind;
    use crate::latlon;

    #[test]
    fn point_uses_lon_lat_order() {
        let geom = Geom::<GeoPoint2d>::try_from(&Value::Point(vec![16.373118, 48.208493])).expect("valid point");
        assert_eq!(geom, Geom::Point(latlon!(48.208493, 16.373118)));
    }

    #[test]
    fn short_position_is_rejected() {
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&Value::Point(vec![16.37])),
            Err(SightsTypesError::Conversion(_))
        );
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&Value::Point(vec![16.37, 148.2])),
            Err(SightsTypesError::Conversion(_))
        );
    }

    #[test]
    fn polygon_ring_drops_closing_point() {
        let value = Value::Polygon(vec![vec![
            vec![16.0, 48.0],
            vec![16.1, 48.0],
            vec![16.1, 48.1],
            vec![16.0, 48.0],
        ]]);

        let geom = Geom::<GeoPoint2d>::try_from(&value).expect("valid polygon");
        assert_eq!(geom.kind(), GeometryKind::Polygon);
        let Geom::Polygon(polygon) = &geom else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.outer_contour.points.len(), 3);
        assert!(polygon.inner_contours.is_empty());

        assert_eq!(Value::from(&geom), value);
    }

    #[test]
    fn degenerate_polygon_is_rejected() {
        let value = Value::Polygon(vec![vec![vec![16.0, 48.0], vec![16.0, 48.0]]]);
        assert_matches!(Geom::<GeoPoint2d>::try_from(&value), Err(SightsTypesError::Conversion(_)));
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&Value::Polygon(vec![])),
            Err(SightsTypesError::Conversion(_))
        );
    }

    #[test]
    fn multi_line_string_converts_every_line() {
        let value = Value::MultiLineString(vec![
            vec![vec![16.36, 48.20], vec![16.37, 48.21]],
            vec![vec![16.38, 48.20], vec![16.39, 48.19], vec![16.40, 48.19]],
        ]);

        let geom = Geom::<GeoPoint2d>::try_from(&value).expect("valid lines");
        assert_eq!(geom.kind(), GeometryKind::Line);
        assert!(geom.anchor().is_none());
        assert_matches!(&geom, Geom::MultiContour(lines) if lines.len() == 2 && lines[1].len() == 3);
        assert_eq!(Value::from(&geom), value);
    }

    #[test]
    fn geometry_collection_is_not_supported() {
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&Value::GeometryCollection(vec![])),
            Err(SightsTypesError::Conversion(_))
        );
    }
}
