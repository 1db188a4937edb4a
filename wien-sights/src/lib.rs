//! Wien Sights loads the sightseeing open data of the City of Vienna into a map model: bus stops
//! and lines of the sightseeing buses, pedestrian zones, sights and hotels.
//!
//! # Quick start
//!
//! ```no_run
//! use wien_sights::pipeline::{default_provider, launch};
//! use wien_sights::AppContext;
//!
//! # tokio_test::block_on(async {
//! let context = AppContext::vienna(Some("#15/48.2085/16.3731"));
//! let mut outcomes = launch(&context, default_provider());
//!
//! while let Some(outcome) = outcomes.recv().await {
//!     println!("{}: {:?}", outcome.group, outcome.result);
//! }
//! # });
//! ```
//!
//! # Main components
//!
//! * [`AppContext`] owns the [`Map`] and the [thematic groups](layer::ThematicGroup) and is
//!   created before any data is loaded.
//! * [`Map`] holds the current [`MapView`], the [layers](layer) offered in the layer control and
//!   the [controls](control) shown over the map.
//! * [Dataset descriptors](dataset::DatasetDescriptor) tell where each dataset comes from and
//!   how its features are shown: the [`symbol`] chooses the marker icon or shape style, the
//!   popup template renders the popup from the feature properties.
//! * The [`pipeline`] loads every dataset in its own task and fills the groups, reporting one
//!   [outcome](pipeline::IngestOutcome) per dataset.
//!
//! Nothing here draws pixels: a host application renders the groups, or exports them as GeoJSON
//! with [`ThematicGroup::to_feature_collection`](layer::ThematicGroup::to_feature_collection).

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod app;
pub(crate) mod async_runtime;
mod color;
pub mod control;
pub mod dataset;
pub mod error;
pub mod layer;
mod map;
mod messenger;
pub mod pipeline;
mod platform;
pub mod tile_schema;
mod view;

#[cfg(test)]
mod tests;

pub use app::AppContext;
pub use color::Color;
pub use layer::feature_group::symbol;
pub use map::{LayerCollection, LayerKind, Map, MapBuilder};
pub use messenger::{DummyMessenger, Messenger};
pub use view::{MapView, MAX_ZOOM};

// Reexport wien_sights_types
pub use wien_sights_types;
