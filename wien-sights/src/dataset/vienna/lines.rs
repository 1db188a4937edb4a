//! Routes of the Vienna Sightseeing hop-on hop-off buses.

use geojson::Feature;

use crate::dataset::{DatasetDescriptor, GroupId, WfsQuery};
use crate::layer::feature_group::{
    HtmlTemplate, PathStyle, PathSymbol, PopupField, PropertySource, PropertyValue,
};
use crate::Color;

/// WFS type name of the dataset.
pub const TYPE_NAME: &str = "ogdwien:TOURISTIKLINIEVSLOGD";

/// Colors of the lines by their `LINE_ID`.
pub const LINE_COLORS: [(&str, Color); 6] = [
    ("1", Color::from_hex("#FF4136")),
    ("2", Color::from_hex("#FFDC00")),
    ("3", Color::from_hex("#0074D9")),
    ("4", Color::from_hex("#2ECC40")),
    ("5", Color::from_hex("#AAAAAA")),
    ("6", Color::from_hex("#FF851B")),
];

/// Popup of a line: name and terminal stops.
pub const POPUP: HtmlTemplate = HtmlTemplate::new(
    concat!(
        r#"<line><i class="fa-solid fa-bus"></i> {LINE_NAME}</line><br><br>"#,
        r#"<start><i class="fa-regular fa-circle-stop"></i> {FROM_NAME}</start><br>"#,
        r#"<i class="fa-sharp fa-solid fa-arrow-down"></i><br>"#,
        r#"<end><i class="fa-regular fa-circle-stop"></i> {TO_NAME}</end>"#,
    ),
    &[
        PopupField::new("LINE_NAME"),
        PopupField::new("FROM_NAME"),
        PopupField::new("TO_NAME"),
    ],
);

/// Color of the line with the given id. Unknown ids have no color.
pub fn line_color(line_id: PropertyValue<'_>) -> Option<Color> {
    LINE_COLORS
        .iter()
        .find(|(id, _)| line_id.eq_str(id))
        .map(|(_, color)| *color)
}

/// Style of a line: dashed, in the color of the line.
pub fn line_style(feature: &Feature) -> PathStyle {
    PathStyle::default()
        .with_color(line_color(feature.property_value("LINE_ID")))
        .with_weight(3.0)
        .with_dash_array([10.0, 4.0])
}

/// Descriptor of the dataset.
pub fn descriptor() -> DatasetDescriptor {
    DatasetDescriptor::new(
        GroupId::Lines,
        WfsQuery::get_feature(TYPE_NAME).url(),
        PathSymbol::new(line_style),
        POPUP,
    )
}
