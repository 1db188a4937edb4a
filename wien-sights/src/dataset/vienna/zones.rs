//! Pedestrian zones.

use crate::dataset::{DatasetDescriptor, GroupId, WfsQuery};
use crate::layer::feature_group::{HtmlTemplate, PathStyle, PathSymbol, PopupField};
use crate::Color;

/// WFS type name of the dataset.
pub const TYPE_NAME: &str = "ogdwien:FUSSGEHERZONEOGD";

/// Popup of a zone: address, time restrictions and exceptions.
pub const POPUP: HtmlTemplate = HtmlTemplate::new(
    concat!(
        "<ort>Fußgängerzone {ADRESSE}</ort><br><br>",
        r#"<zeitraum><i class="fa-regular fa-clock"></i> {ZEITRAUM}</zeitraum><br><br>"#,
        r#"<information><i class="fa-solid fa-circle-info"></i> {AUSN_TEXT}</information>"#,
    ),
    &[
        PopupField::new("ADRESSE"),
        PopupField::with_fallback("ZEITRAUM", "permanent"),
        PopupField::with_fallback("AUSN_TEXT", "no exceptions"),
    ],
);

/// Style of all zones.
pub fn zone_style() -> PathStyle {
    PathStyle::default()
        .with_color(Some(Color::FUCHSIA))
        .with_weight(1.0)
        .with_opacity(0.4)
        .with_fill_opacity(0.1)
}

/// Descriptor of the dataset.
pub fn descriptor() -> DatasetDescriptor {
    DatasetDescriptor::new(
        GroupId::Zones,
        WfsQuery::get_feature(TYPE_NAME).url(),
        PathSymbol::fixed(zone_style()),
        POPUP,
    )
}

#[cfg(test)]
mod tests {
    use geojson::Feature;
    use serde_json::json;

    use super::*;

    fn zone(properties: serde_json::Value) -> Feature {
        serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[16.3690, 48.2080], [16.3720, 48.2080], [16.3720, 48.2090], [16.3690, 48.2080]]]
            },
            "properties": properties,
        }))
        .expect("valid feature")
    }

    #[test]
    fn falls_back_for_missing_texts() {
        let entity = descriptor()
            .to_entity(&zone(json!({"ADRESSE": "Graben", "ZEITRAUM": null})))
            .expect("entity");
        let content = entity.popup().content();

        assert!(content.contains("Fußgängerzone Graben"));
        assert!(content.contains("</i> permanent</zeitraum>"));
        assert!(content.contains("</i> no exceptions</information>"));
    }

    #[test]
    fn keeps_present_texts() {
        let entity = descriptor()
            .to_entity(&zone(json!({
                "ADRESSE": "Kärntner Straße",
                "ZEITRAUM": "Mo-Sa 10:30-18:00",
                "AUSN_TEXT": "Lieferverkehr 6-10:30",
            })))
            .expect("entity");
        let content = entity.popup().content();

        assert!(content.contains("</i> Mo-Sa 10:30-18:00</zeitraum>"));
        assert!(content.contains("</i> Lieferverkehr 6-10:30</information>"));
    }

    #[test]
    fn zone_is_fuchsia() {
        let entity = descriptor()
            .to_entity(&zone(json!({})))
            .expect("entity");
        let style = entity.style().expect("shape");
        assert_eq!(style.color, Some(Color::FUCHSIA));
        assert_eq!(style.weight, 1.0);
        assert_eq!(style.opacity, 0.4);
        assert_eq!(style.fill_opacity, 0.1);
    }
}
