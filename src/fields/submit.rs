//! Submit button field.

use crate::escape::escape_html;
use crate::fields::{Field, FieldType};
use crate::messages::Messages;

/// Submit button.
///
/// The button caption is the localized label message, rendered as the
/// input's value. Like [`crate::HiddenField`] it renders an empty label, so
/// the caption appears only on the button itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitField {
    /// Loader-assigned numeric id
    pub id: u32,
    /// Field name (HTML control name)
    pub name: String,
    /// Label message id; localized into the button caption
    pub label: String,
    /// Whether the field is marked as required in its definition
    pub requested: bool,
    /// Help message id shown as the button's title attribute
    pub help: Option<String>,
}

impl SubmitField {
    /// Create a new submit button with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            label: String::new(),
            requested: false,
            help: None,
        }
    }

    /// Set the numeric id
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Set the label message id used as the button caption
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the help message id
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl Field for SubmitField {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> FieldType {
        FieldType::Submit
    }

    fn render_label(&self, _messages: &Messages, _lang: &str) -> String {
        String::new()
    }

    fn render_control(&self, messages: &Messages, lang: &str) -> String {
        let mut html = format!(
            "<input type=\"submit\" value=\"{}\" name=\"{}\"",
            escape_html(&messages.resolve(&self.label, lang)),
            escape_html(&self.name),
        );
        if let Some(help) = &self.help {
            html.push_str(&format!(
                " title=\"{}\"",
                escape_html(&messages.resolve(help, lang))
            ));
        }
        html.push_str(" />");
        html
    }
}
