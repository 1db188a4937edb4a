use wien_sights_types::geo::GeoPoint;

use crate::view::MapView;

const EARTH_RADIUS: f64 = 6_371_000.0;
const WEB_MERCATOR_RADIUS: f64 = 6_378_137.0;

/// Scale bar showing a round distance on the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleControl {
    /// Maximum width of the bar in pixels.
    pub max_width: u32,
    /// Whether the metric scale is shown.
    pub metric: bool,
}

impl Default for ScaleControl {
    fn default() -> Self {
        Self {
            max_width: 100,
            metric: true,
        }
    }
}

/// Label and width of the scale bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleBar {
    /// Distance represented by the bar, e.g. `300 m` or `10 km`.
    pub label: String,
    /// Width of the bar in pixels.
    pub width_px: u32,
}

impl ScaleControl {
    /// Metric scale bar for the given view, or `None` if the metric scale is switched off.
    ///
    /// The bar shows the largest round distance that fits into the maximum width, measured
    /// along the parallel through the view center.
    pub fn metric_scale(&self, view: &MapView) -> Option<ScaleBar> {
        if !self.metric || self.max_width == 0 {
            return None;
        }

        let max_meters = self.max_distance(view);
        if !max_meters.is_finite() || max_meters <= 0.0 {
            return None;
        }

        let meters = round_number(max_meters);
        let label = if meters < 1000.0 {
            format!("{meters} m")
        } else {
            format!("{} km", meters / 1000.0)
        };

        Some(ScaleBar {
            label,
            width_px: (self.max_width as f64 * meters / max_meters).round() as u32,
        })
    }

    fn max_distance(&self, view: &MapView) -> f64 {
        let lat = view.center().lat_rad();
        let lon_delta = self.max_width as f64 * view.resolution() / WEB_MERCATOR_RADIUS;

        // Haversine distance between two points on the same parallel.
        let a = lat.cos().powi(2) * (lon_delta / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// The largest of 1, 2, 3, 5 and 10 times a power of ten not above `value`.
fn round_number(value: f64) -> f64 {
    let pow10 = 10f64.powf(value.log10().floor());
    let d = value / pow10;
    let d = if d >= 10.0 {
        10.0
    } else if d >= 5.0 {
        5.0
    } else if d >= 3.0 {
        3.0
    } else if d >= 2.0 {
        2.0
    } else {
        1.0
    };

    pow10 * d
}

#[cfg(test)]
mod tests {
    use wien_sights_types::latlon;

    use super::*;

    fn vienna(zoom: u32) -> MapView {
        MapView::new(latlon!(48.208493, 16.373118), zoom)
    }

    #[test]
    fn scale_at_initial_view() {
        let bar = ScaleControl::default()
            .metric_scale(&vienna(15))
            .expect("scale");
        assert_eq!(bar.label, "300 m");
        assert_eq!(bar.width_px, 94);
    }

    #[test]
    fn kilometers() {
        let bar = ScaleControl::default()
            .metric_scale(&vienna(10))
            .expect("scale");
        assert_eq!(bar.label, "10 km");
        assert_eq!(bar.width_px, 98);
    }

    #[test]
    fn round_numbers() {
        assert_eq!(round_number(318.0), 300.0);
        assert_eq!(round_number(199.0), 100.0);
        assert_eq!(round_number(2.5), 2.0);
        assert_eq!(round_number(7.0), 5.0);
        assert_eq!(round_number(1500.0), 1000.0);
    }

    #[test]
    fn metric_off() {
        let control = ScaleControl {
            metric: false,
            ..Default::default()
        };
        assert_eq!(control.metric_scale(&vienna(15)), None);
    }
}
