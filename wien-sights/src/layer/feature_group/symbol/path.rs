use wien_sights_types::geo::GeoPoint2d;
use wien_sights_types::{Geom, GeometryKind};

use crate::layer::feature_group::entity::{EntityKind, PathStyle};
use crate::layer::feature_group::symbol::Symbol;

/// Function choosing the path style of a feature.
pub trait StyleSource<F>: Fn(&F) -> PathStyle + Send + Sync {}
impl<F, T: Fn(&F) -> PathStyle + Send + Sync> StyleSource<F> for T {}

/// Draws line and polygon features as shapes.
pub struct PathSymbol<F> {
    style_source: Box<dyn StyleSource<F>>,
}

impl<F> PathSymbol<F> {
    /// Creates a symbol that computes the style for every feature.
    pub fn new(style_source: impl StyleSource<F> + 'static) -> Self {
        Self {
            style_source: Box::new(style_source),
        }
    }
}

impl<F: 'static> PathSymbol<F> {
    /// Creates a symbol with the same style for all features.
    pub fn fixed(style: PathStyle) -> Self {
        Self::new(move |_: &F| style.clone())
    }
}

impl<F> Symbol<F> for PathSymbol<F> {
    fn entity_kind(&self, feature: &F, geometry: &Geom<GeoPoint2d>) -> Option<EntityKind> {
        match geometry.kind() {
            GeometryKind::Line | GeometryKind::Polygon => {
                Some(EntityKind::Shape((self.style_source)(feature)))
            }
            GeometryKind::Point => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use wien_sights_types::{latlon, ClosedContour, Contour, Polygon};

    use super::*;
    use crate::Color;

    #[test]
    fn draws_lines_and_polygons() {
        let style = PathStyle::default().with_color(Some(Color::RED));
        let symbol = PathSymbol::<()>::fixed(style.clone());

        let line = Geom::Contour(Contour::open(vec![latlon!(48.2, 16.3), latlon!(48.3, 16.4)]));
        assert_eq!(
            symbol.entity_kind(&(), &line),
            Some(EntityKind::Shape(style.clone()))
        );

        let polygon = Geom::Polygon(Polygon::from(ClosedContour::new(vec![
            latlon!(48.2, 16.3),
            latlon!(48.3, 16.4),
            latlon!(48.2, 16.4),
        ])));
        assert_eq!(
            symbol.entity_kind(&(), &polygon),
            Some(EntityKind::Shape(style))
        );

        assert_eq!(
            symbol.entity_kind(&(), &Geom::Point(latlon!(48.2, 16.3))),
            None
        );
    }

    #[test]
    fn style_depends_on_feature() {
        let symbol = PathSymbol::new(|weight: &f64| PathStyle::default().with_weight(*weight));
        let line = Geom::Contour(Contour::open(vec![latlon!(48.2, 16.3), latlon!(48.3, 16.4)]));

        let Some(EntityKind::Shape(style)) = symbol.entity_kind(&5.0, &line) else {
            panic!("expected a shape");
        };
        assert_eq!(style.weight, 5.0);
    }
}
