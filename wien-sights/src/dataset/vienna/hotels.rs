//! Hotels and other accommodation.

use geojson::Feature;

use crate::dataset::{DatasetDescriptor, GroupId, WfsQuery};
use crate::layer::feature_group::{HtmlTemplate, Icon, MarkerSymbol, PopupField, PropertySource};

/// WFS type name of the dataset.
pub const TYPE_NAME: &str = "ogdwien:UNTERKUNFTOGD";

/// Icon of hotels with an unknown category.
pub const DEFAULT_ICON: &str = "hotel.png";

/// Icons by the `KATEGORIE_TXT` property.
pub const CATEGORY_ICONS: [(&str, &str); 6] = [
    ("nicht kategorisiert", "hotel.png"),
    ("1*", "hotel_1.png"),
    ("2*", "hotel_2.png"),
    ("3*", "hotel_3.png"),
    ("4*", "hotel_4.png"),
    ("5*", "hotel_5.png"),
];

/// Popup of a hotel: name, type and category, address, contact and homepage links.
pub const POPUP: HtmlTemplate = HtmlTemplate::new(
    concat!(
        "<h3>{BETRIEB}</h3>",
        "<h4>{BETRIEBSART_TXT} {KATEGORIE_TXT}</h4>",
        "<hr>",
        "Addr.: {ADRESSE}<br>",
        r#"Tel.: <a href="mailto:{KONTAKT_EMAIL}">{KONTAKT_EMAIL}</a><br>"#,
        r#"<a href="{WEBLINK1}">Homepage</a><br>"#,
    ),
    &[
        PopupField::new("BETRIEB"),
        PopupField::new("BETRIEBSART_TXT"),
        PopupField::new("KATEGORIE_TXT"),
        PopupField::new("ADRESSE"),
        PopupField::new("KONTAKT_EMAIL"),
        PopupField::new("WEBLINK1"),
    ],
);

/// Icon of a hotel by its category.
pub fn hotel_icon(feature: &Feature) -> Icon {
    let category = feature.property_value("KATEGORIE_TXT");
    let url = CATEGORY_ICONS
        .iter()
        .find(|(name, _)| category.eq_str(name))
        .map_or(DEFAULT_ICON, |(_, icon)| *icon);

    Icon::new(url)
}

/// Descriptor of the dataset.
pub fn descriptor() -> DatasetDescriptor {
    DatasetDescriptor::new(
        GroupId::Hotels,
        WfsQuery::get_feature(TYPE_NAME).url(),
        MarkerSymbol::new(hotel_icon),
        POPUP,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn hotel(properties: serde_json::Value) -> Feature {
        serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [16.3717, 48.2049]},
            "properties": properties,
        }))
        .expect("valid feature")
    }

    #[test]
    fn icon_by_category() {
        let icon = |category: serde_json::Value| {
            hotel_icon(&hotel(json!({ "KATEGORIE_TXT": category }))).url().to_string()
        };

        assert_eq!(icon(json!("3*")), "hotel_3.png");
        assert_eq!(icon(json!("5*")), "hotel_5.png");
        assert_eq!(icon(json!("nicht kategorisiert")), "hotel.png");
        assert_eq!(icon(json!("3* superior")), "hotel.png");
        assert_eq!(icon(json!(null)), "hotel.png");
    }

    #[test]
    fn hotel_entity() {
        let feature = hotel(json!({
            "BETRIEB": "Hotel Sacher",
            "BETRIEBSART_TXT": "Hotel",
            "KATEGORIE_TXT": "5*",
            "ADRESSE": "1., Philharmonikerstraße 4",
            "KONTAKT_EMAIL": "wien@sacher.com",
            "WEBLINK1": "https://www.sacher.com",
        }));

        let entity = descriptor().to_entity(&feature).expect("entity");
        let content = entity.popup().content();

        assert_eq!(entity.icon().map(Icon::url), Some("hotel_5.png"));
        assert!(content.starts_with("<h3>Hotel Sacher</h3><h4>Hotel 5*</h4>"));
        assert!(content.contains(r#"<a href="mailto:wien@sacher.com">wien@sacher.com</a>"#));
        assert!(content.contains(r#"<a href="https://www.sacher.com">Homepage</a>"#));
    }
}
