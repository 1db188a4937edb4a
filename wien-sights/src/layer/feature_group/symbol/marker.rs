use wien_sights_types::geo::GeoPoint2d;
use wien_sights_types::{Geom, GeometryKind};

use crate::layer::feature_group::entity::{EntityKind, Icon};
use crate::layer::feature_group::symbol::Symbol;

/// Function choosing the marker icon of a feature.
pub trait IconSource<F>: Fn(&F) -> Icon + Send + Sync {}
impl<F, T: Fn(&F) -> Icon + Send + Sync> IconSource<F> for T {}

/// Draws point features as markers.
pub struct MarkerSymbol<F> {
    icon_source: Box<dyn IconSource<F>>,
}

impl<F> MarkerSymbol<F> {
    /// Creates a symbol that picks the icon for every feature.
    pub fn new(icon_source: impl IconSource<F> + 'static) -> Self {
        Self {
            icon_source: Box::new(icon_source),
        }
    }
}

impl<F: 'static> MarkerSymbol<F> {
    /// Creates a symbol that uses the same icon for all features.
    pub fn fixed(icon: Icon) -> Self {
        Self::new(move |_: &F| icon.clone())
    }
}

impl<F> Symbol<F> for MarkerSymbol<F> {
    fn entity_kind(&self, feature: &F, geometry: &Geom<GeoPoint2d>) -> Option<EntityKind> {
        match geometry.kind() {
            GeometryKind::Point => Some(EntityKind::Marker((self.icon_source)(feature))),
            GeometryKind::Line | GeometryKind::Polygon => None,
        }
    }
}
