//! Sights of Vienna.

use crate::dataset::{DatasetDescriptor, GroupId, WfsQuery};
use crate::layer::feature_group::{HtmlTemplate, Icon, MarkerSymbol, PopupField};

/// WFS type name of the dataset.
pub const TYPE_NAME: &str = "ogdwien:SEHENSWUERDIGOGD";

/// Icon of all sights.
pub const ICON: &str = "photo.png";

/// Popup of a sight: thumbnail, name linked to further information, address.
pub const POPUP: HtmlTemplate = HtmlTemplate::new(
    concat!(
        r#"<img src="{THUMBNAIL}" alt="*">"#,
        r#"<h4><a href="{WEITERE_INF}" target="Wien">{NAME}</a></h4>"#,
        r#"<address>{ADRESSE}</address>"#,
    ),
    &[
        PopupField::new("THUMBNAIL"),
        PopupField::new("WEITERE_INF"),
        PopupField::new("NAME"),
        PopupField::new("ADRESSE"),
    ],
);

/// Descriptor of the dataset.
pub fn descriptor() -> DatasetDescriptor {
    DatasetDescriptor::new(
        GroupId::Sights,
        WfsQuery::get_feature(TYPE_NAME).url(),
        MarkerSymbol::fixed(Icon::new(ICON)),
        POPUP,
    )
}

#[cfg(test)]
mod tests {
    use geojson::Feature;
    use serde_json::json;

    use super::*;

    #[test]
    fn sight_entity() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [16.3599, 48.2082]},
            "properties": {
                "NAME": "Burgtheater",
                "ADRESSE": "1., Universitätsring 2",
                "THUMBNAIL": "https://example.org/thumb.jpg",
                "WEITERE_INF": "https://example.org/?a=1&b=2",
            },
        }))
        .expect("valid feature");

        let entity = descriptor().to_entity(&feature).expect("entity");
        assert_eq!(entity.icon().map(Icon::url), Some("photo.png"));
        assert_eq!(
            entity.popup().content(),
            concat!(
                r#"<img src="https://example.org/thumb.jpg" alt="*">"#,
                r#"<h4><a href="https://example.org/?a=1&amp;b=2" target="Wien">Burgtheater</a></h4>"#,
                r#"<address>1., Universitätsring 2</address>"#,
            )
        );
    }
}
