//! Stops of the Vienna Sightseeing hop-on hop-off buses.

use geojson::Feature;

use crate::dataset::{DatasetDescriptor, GroupId, WfsQuery};
use crate::layer::feature_group::{HtmlTemplate, Icon, MarkerSymbol, PopupField, PropertySource};

/// WFS type name of the dataset.
pub const TYPE_NAME: &str = "ogdwien:TOURISTIKHTSVSLOGD";

/// Popup of a stop: line name, stop id and stop name.
pub const POPUP: HtmlTemplate = HtmlTemplate::new(
    r#"<line><i class="fa-solid fa-bus"></i> {LINE_NAME}</line><br><br><stop>{STAT_ID} {STAT_NAME}</stop>"#,
    &[
        PopupField::new("LINE_NAME"),
        PopupField::new("STAT_ID"),
        PopupField::new("STAT_NAME"),
    ],
);

/// Icon of a stop: the bus icon in the color of its line.
pub fn stop_icon(feature: &Feature) -> Icon {
    let line_id = feature.property_value("LINE_ID");
    if line_id.is_missing() {
        Icon::new("bus.png")
    } else {
        Icon::new(format!("bus_{line_id}.png"))
    }
}

/// Descriptor of the dataset.
pub fn descriptor() -> DatasetDescriptor {
    DatasetDescriptor::new(
        GroupId::Stops,
        WfsQuery::get_feature(TYPE_NAME).url(),
        MarkerSymbol::new(stop_icon),
        POPUP,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::layer::feature_group::EntityKind;

    fn stop(properties: serde_json::Value) -> Feature {
        serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [16.3695, 48.2038]},
            "properties": properties,
        }))
        .expect("valid feature")
    }

    #[test]
    fn icon_by_line() {
        assert_eq!(stop_icon(&stop(json!({"LINE_ID": 3}))).url(), "bus_3.png");
        assert_eq!(stop_icon(&stop(json!({"LINE_ID": "6"}))).url(), "bus_6.png");
        assert_eq!(stop_icon(&stop(json!({"LINE_ID": 3.0}))).url(), "bus_3.png");
        assert_eq!(stop_icon(&stop(json!({}))).url(), "bus.png");
    }

    #[test]
    fn stop_entity() {
        let feature = stop(json!({
            "LINE_ID": 1,
            "LINE_NAME": "Red Line",
            "STAT_ID": 4,
            "STAT_NAME": "Staatsoper",
        }));

        let entity = descriptor().to_entity(&feature).expect("entity");
        assert_eq!(
            entity.kind(),
            &EntityKind::Marker(Icon::new("bus_1.png"))
        );
        assert_eq!(
            entity.popup().content(),
            r#"<line><i class="fa-solid fa-bus"></i> Red Line</line><br><br><stop>4 Staatsoper</stop>"#
        );
    }
}
