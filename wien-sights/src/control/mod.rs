//! Map controls: widgets the host shows over the map.

mod fullscreen;
mod scale;

pub use fullscreen::FullscreenControl;
pub use scale::{ScaleBar, ScaleControl};
