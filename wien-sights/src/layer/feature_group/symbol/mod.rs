//! Symbols decide what a [feature](geojson::Feature) looks like on the map.
//!
//! [`Symbol`] is easy to implement, so a dataset may carry its own styling rules. The two
//! provided implementations cover markers with icons and shapes with path styles; both take an
//! arbitrary function of the feature to choose the icon or the style.

mod marker;
mod path;

pub use marker::{IconSource, MarkerSymbol};
pub use path::{PathSymbol, StyleSource};
use wien_sights_types::geo::GeoPoint2d;
use wien_sights_types::Geom;

use crate::layer::feature_group::entity::EntityKind;

/// Symbol is used to turn a feature `F` into a visual entity.
pub trait Symbol<F>: Send + Sync {
    /// Returns the look of the given `feature` with its `geometry`.
    ///
    /// If the symbol cannot draw the geometry (e.g. a marker symbol given a polygon), `None` is
    /// returned and the feature is skipped.
    fn entity_kind(&self, feature: &F, geometry: &Geom<GeoPoint2d>) -> Option<EntityKind>;
}
