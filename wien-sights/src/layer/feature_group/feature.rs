use std::fmt::{Display, Formatter};

use geojson::{JsonObject, JsonValue};

/// Value of a named feature property.
///
/// GeoJSON properties are untyped; the datasets mix strings and numbers for the same kind of
/// value (e.g. line ids), so values are compared and displayed by their textual form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue<'a> {
    /// String value.
    String(&'a str),
    /// Numeric value.
    Number(&'a serde_json::Number),
    /// Boolean value.
    Bool(bool),
    /// Array or object value.
    Other(&'a JsonValue),
    /// The property is absent or `null`.
    Missing,
}

impl<'a> From<Option<&'a JsonValue>> for PropertyValue<'a> {
    fn from(value: Option<&'a JsonValue>) -> Self {
        match value {
            None | Some(JsonValue::Null) => PropertyValue::Missing,
            Some(JsonValue::String(s)) => PropertyValue::String(s),
            Some(JsonValue::Number(n)) => PropertyValue::Number(n),
            Some(JsonValue::Bool(b)) => PropertyValue::Bool(*b),
            Some(other) => PropertyValue::Other(other),
        }
    }
}

impl Display for PropertyValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::String(v) => write!(f, "{v}"),
            PropertyValue::Number(v) => write!(f, "{}", number_text(v)),
            PropertyValue::Bool(v) => write!(f, "{v}"),
            PropertyValue::Other(v) => write!(f, "{v}"),
            PropertyValue::Missing => Ok(()),
        }
    }
}

/// Integral floats print without a fraction, so `3.0` and `3` read the same.
fn number_text(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(v) if number.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{v:.0}"),
        _ => number.to_string(),
    }
}

impl PropertyValue<'_> {
    /// Compares the textual form of the value with the given string.
    pub fn eq_str(&self, str_value: &str) -> bool {
        match self {
            PropertyValue::String(s) => *s == str_value,
            PropertyValue::Number(n) => number_text(n) == str_value,
            PropertyValue::Bool(b) => str_value.parse::<bool>() == Ok(*b),
            PropertyValue::Other(_) | PropertyValue::Missing => false,
        }
    }

    /// Returns true if the property is absent or `null`.
    pub fn is_missing(&self) -> bool {
        matches!(self, PropertyValue::Missing)
    }

    /// Returns true for values a page script treats as false: missing, empty string, `false`
    /// and zero. Optional popup texts fall back to their default for these values.
    pub fn is_falsy(&self) -> bool {
        match self {
            PropertyValue::Missing => true,
            PropertyValue::String(s) => s.is_empty(),
            PropertyValue::Bool(b) => !b,
            PropertyValue::Number(n) => n.as_f64() == Some(0.0),
            PropertyValue::Other(_) => false,
        }
    }
}

/// Anything named properties can be read from.
pub trait PropertySource {
    /// Returns the value of the property with the given name.
    fn property_value(&self, name: &str) -> PropertyValue<'_>;
}

impl PropertySource for JsonObject {
    fn property_value(&self, name: &str) -> PropertyValue<'_> {
        self.get(name).into()
    }
}

impl PropertySource for geojson::Feature {
    fn property_value(&self, name: &str) -> PropertyValue<'_> {
        match &self.properties {
            Some(properties) => properties.property_value(name),
            None => PropertyValue::Missing,
        }
    }
}
