use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, OnceLock};

use geojson::JsonObject;

use crate::layer::feature_group::feature::PropertySource;

/// Produces the HTML content of a popup from the properties of one feature.
pub trait PopupTemplate: Send + Sync {
    /// Renders the popup content.
    fn render(&self, properties: &JsonObject) -> String;
}

impl<T> PopupTemplate for T
where
    T: Fn(&JsonObject) -> String + Send + Sync,
{
    fn render(&self, properties: &JsonObject) -> String {
        self(properties)
    }
}

/// Popup attached to a visual entity.
///
/// The popup keeps a copy of its feature's properties and renders the HTML on first access only.
pub struct Popup {
    properties: JsonObject,
    template: Arc<dyn PopupTemplate>,
    content: OnceLock<String>,
}

impl Popup {
    /// Binds the template to the properties of a feature.
    pub fn new(template: Arc<dyn PopupTemplate>, properties: JsonObject) -> Self {
        Self {
            properties,
            template,
            content: OnceLock::new(),
        }
    }

    /// HTML content of the popup.
    pub fn content(&self) -> &str {
        self.content
            .get_or_init(|| self.template.render(&self.properties))
    }

    /// Returns true if the content was already rendered.
    pub fn is_rendered(&self) -> bool {
        self.content.get().is_some()
    }

    /// Properties of the feature the popup belongs to.
    pub fn properties(&self) -> &JsonObject {
        &self.properties
    }
}

impl Debug for Popup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popup")
            .field("properties", &self.properties)
            .field("content", &self.content.get())
            .finish()
    }
}

/// Placeholder of an [`HtmlTemplate`], filled with the property of the same name.
#[derive(Debug, Clone, Copy)]
pub struct PopupField {
    name: &'static str,
    fallback: Option<&'static str>,
}

impl PopupField {
    /// Field that renders as empty text if the property is missing.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            fallback: None,
        }
    }

    /// Field that renders `fallback` if the property is missing or falsy.
    pub const fn with_fallback(name: &'static str, fallback: &'static str) -> Self {
        Self {
            name,
            fallback: Some(fallback),
        }
    }

    fn value(&self, properties: &JsonObject) -> String {
        let value = properties.property_value(self.name);
        match self.fallback {
            Some(fallback) if value.is_falsy() => escape_html(fallback),
            _ => escape_html(&value.to_string()),
        }
    }
}

/// HTML popup template with `{NAME}` placeholders.
///
/// Every placeholder must be declared as a [`PopupField`]. Property values are HTML-escaped before
/// they are substituted.
#[derive(Debug, Clone, Copy)]
pub struct HtmlTemplate {
    pattern: &'static str,
    fields: &'static [PopupField],
}

impl HtmlTemplate {
    /// Creates a new template.
    pub const fn new(pattern: &'static str, fields: &'static [PopupField]) -> Self {
        Self { pattern, fields }
    }
}

impl PopupTemplate for HtmlTemplate {
    fn render(&self, properties: &JsonObject) -> String {
        let vars: HashMap<String, String> = self
            .fields
            .iter()
            .map(|field| (field.name.to_string(), field.value(properties)))
            .collect();

        match strfmt::strfmt(self.pattern, &vars) {
            Ok(content) => content,
            Err(err) => {
                log::error!("Failed to render popup template: {err}");
                String::new()
            }
        }
    }
}

/// Escapes the characters that have a meaning in HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const GREETING: HtmlTemplate = HtmlTemplate::new(
        "<b>{NAME}</b> ({HOURS})",
        &[
            PopupField::new("NAME"),
            PopupField::with_fallback("HOURS", "always open"),
        ],
    );

    fn properties(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn substitutes_and_escapes() {
        let content = GREETING.render(&properties(json!({"NAME": "Café <Central>", "HOURS": "8-22"})));
        assert_eq!(content, "<b>Café &lt;Central&gt;</b> (8-22)");
    }

    #[test]
    fn missing_values() {
        let content = GREETING.render(&properties(json!({"HOURS": ""})));
        assert_eq!(content, "<b></b> (always open)");
    }

    #[test]
    fn undeclared_placeholder_renders_nothing() {
        const TEMPLATE: HtmlTemplate =
            HtmlTemplate::new("{NAME} {OTHER}", &[PopupField::new("NAME")]);
        assert_eq!(TEMPLATE.render(&JsonObject::new()), "");
    }

    #[test]
    fn popup_renders_lazily_once() {
        let template: Arc<dyn PopupTemplate> = Arc::new(GREETING);
        let popup = Popup::new(template, properties(json!({"NAME": "Prater"})));

        assert!(!popup.is_rendered());
        assert_eq!(popup.content(), "<b>Prater</b> (always open)");
        assert!(popup.is_rendered());
    }

    #[test]
    fn closures_are_templates() {
        let template = |props: &JsonObject| format!("{} properties", props.len());
        assert_eq!(template.render(&properties(json!({"A": 1, "B": 2}))), "2 properties");
    }
}
