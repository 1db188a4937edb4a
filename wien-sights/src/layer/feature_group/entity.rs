use geojson::{Feature, JsonObject, JsonValue};
use serde_json::json;
use wien_sights_types::geo::GeoPoint2d;
use wien_sights_types::Geom;

use crate::layer::feature_group::popup::Popup;
use crate::Color;

/// Offset in pixels of the icon tip relative to the top-left corner of the icon image.
pub const ICON_ANCHOR: [i32; 2] = [16, 37];
/// Offset in pixels of the popup tip relative to the icon anchor.
pub const POPUP_ANCHOR: [i32; 2] = [0, -37];

/// Image used to draw a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    url: String,
    icon_anchor: [i32; 2],
    popup_anchor: [i32; 2],
}

impl Icon {
    /// Icon with the standard pin anchors.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            icon_anchor: ICON_ANCHOR,
            popup_anchor: POPUP_ANCHOR,
        }
    }

    /// Image url (relative to the host's asset location).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Icon anchor.
    pub fn icon_anchor(&self) -> [i32; 2] {
        self.icon_anchor
    }

    /// Popup anchor.
    pub fn popup_anchor(&self) -> [i32; 2] {
        self.popup_anchor
    }
}

/// Style of a line or polygon shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    /// Stroke (and fill) color. `None` lets the host use its default color.
    pub color: Option<Color>,
    /// Stroke width in pixels.
    pub weight: f64,
    /// Stroke opacity.
    pub opacity: f64,
    /// Fill opacity of polygons.
    pub fill_opacity: f64,
    /// Dash pattern in pixels: lengths of dashes and gaps.
    pub dash_array: Option<Vec<f64>>,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: None,
            weight: 3.0,
            opacity: 1.0,
            fill_opacity: 0.2,
            dash_array: None,
        }
    }
}

impl PathStyle {
    /// Sets the color.
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Sets the stroke width.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the stroke opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the fill opacity.
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }

    /// Sets the dash pattern.
    pub fn with_dash_array(mut self, dash_array: impl Into<Vec<f64>>) -> Self {
        self.dash_array = Some(dash_array.into());
        self
    }
}

/// What an entity looks like on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// Icon placed at a point.
    Marker(Icon),
    /// Line or polygon drawn with a path style.
    Shape(PathStyle),
}

/// A feature turned into something a map can show: geometry, look and popup.
#[derive(Debug)]
pub struct VisualEntity {
    geometry: Geom<GeoPoint2d>,
    kind: EntityKind,
    popup: Popup,
}

impl VisualEntity {
    /// Creates a new entity.
    pub fn new(geometry: Geom<GeoPoint2d>, kind: EntityKind, popup: Popup) -> Self {
        Self {
            geometry,
            kind,
            popup,
        }
    }

    /// Geometry of the entity.
    pub fn geometry(&self) -> &Geom<GeoPoint2d> {
        &self.geometry
    }

    /// Marker or shape.
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Icon of the entity, if it is a marker.
    pub fn icon(&self) -> Option<&Icon> {
        match &self.kind {
            EntityKind::Marker(icon) => Some(icon),
            EntityKind::Shape(_) => None,
        }
    }

    /// Style of the entity, if it is a shape.
    pub fn style(&self) -> Option<&PathStyle> {
        match &self.kind {
            EntityKind::Marker(_) => None,
            EntityKind::Shape(style) => Some(style),
        }
    }

    /// Attached popup.
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// Converts the entity into a GeoJSON feature.
    ///
    /// The properties of the source feature are kept. The rendered popup goes into the `popup`
    /// property, the icon or style into simplestyle-like properties.
    pub fn to_feature(&self) -> Feature {
        let mut properties: JsonObject = self.popup.properties().clone();
        properties.insert(
            "popup".to_string(),
            JsonValue::String(self.popup.content().to_string()),
        );

        match &self.kind {
            EntityKind::Marker(icon) => {
                properties.insert("icon".to_string(), json!(icon.url()));
                properties.insert("icon_anchor".to_string(), json!(icon.icon_anchor()));
                properties.insert("popup_anchor".to_string(), json!(icon.popup_anchor()));
            }
            EntityKind::Shape(style) => {
                if let Some(color) = style.color {
                    properties.insert("stroke".to_string(), json!(color.to_css()));
                    properties.insert("fill".to_string(), json!(color.to_css()));
                }
                properties.insert("stroke-width".to_string(), json!(style.weight));
                properties.insert("stroke-opacity".to_string(), json!(style.opacity));
                properties.insert("fill-opacity".to_string(), json!(style.fill_opacity));
                if let Some(dash_array) = &style.dash_array {
                    properties.insert("dash_array".to_string(), json!(dash_array));
                }
            }
        }

        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new((&self.geometry).into())),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wien_sights_types::latlon;

    use super::*;
    use crate::layer::feature_group::popup::PopupTemplate;

    fn popup(name: &str) -> Popup {
        let template: Arc<dyn PopupTemplate> =
            Arc::new(|props: &JsonObject| format!("<b>{}</b>", props["NAME"].as_str().unwrap_or("")));
        let mut properties = JsonObject::new();
        properties.insert("NAME".to_string(), json!(name));
        Popup::new(template, properties)
    }

    #[test]
    fn default_icon_anchors() {
        let icon = Icon::new("photo.png");
        assert_eq!(icon.icon_anchor(), [16, 37]);
        assert_eq!(icon.popup_anchor(), [0, -37]);
    }

    #[test]
    fn marker_to_feature() {
        let entity = VisualEntity::new(
            Geom::Point(latlon!(48.2, 16.37)),
            EntityKind::Marker(Icon::new("photo.png")),
            popup("Albertina"),
        );

        let feature = entity.to_feature();
        let properties = feature.properties.expect("properties");
        assert_eq!(properties["popup"], json!("<b>Albertina</b>"));
        assert_eq!(properties["icon"], json!("photo.png"));
        assert_eq!(properties["NAME"], json!("Albertina"));
        assert_eq!(
            feature.geometry.expect("geometry").value,
            geojson::Value::Point(vec![16.37, 48.2])
        );
    }

    #[test]
    fn shape_to_feature() {
        let style = PathStyle::default()
            .with_color(Some(Color::FUCHSIA))
            .with_weight(1.0)
            .with_dash_array([10.0, 4.0]);
        let entity = VisualEntity::new(
            Geom::Point(latlon!(48.2, 16.37)),
            EntityKind::Shape(style),
            popup("Graben"),
        );

        let properties = entity.to_feature().properties.expect("properties");
        assert_eq!(properties["stroke"], json!("#FF00FF"));
        assert_eq!(properties["stroke-width"], json!(1.0));
        assert_eq!(properties["dash_array"], json!([10.0, 4.0]));
        assert!(entity.icon().is_none());
    }
}
