//! Hidden value field.

use crate::escape::escape_html;
use crate::fields::{Field, FieldType};
use crate::messages::Messages;

/// Hidden value submitted with the form.
///
/// Carries a fixed value the user never sees. Its label renders as an empty
/// string, so the form's label cell stays blank.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiddenField {
    /// Loader-assigned numeric id
    pub id: u32,
    /// Field name (HTML control name)
    pub name: String,
    /// Label message id; hidden fields never render it
    pub label: String,
    /// Whether the field is marked as required in its definition
    pub requested: bool,
    /// Help message id; hidden fields never render it
    pub help: Option<String>,
    /// Value submitted with the form
    pub value: String,
}

impl HiddenField {
    /// Create a new hidden field with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            label: String::new(),
            requested: false,
            help: None,
            value: String::new(),
        }
    }

    /// Set the numeric id
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Set the label message id
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the submitted value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl Field for HiddenField {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> FieldType {
        FieldType::Hidden
    }

    fn render_label(&self, _messages: &Messages, _lang: &str) -> String {
        String::new()
    }

    fn render_control(&self, _messages: &Messages, _lang: &str) -> String {
        format!(
            "<input type=\"hidden\" value=\"{}\" name=\"{}\" />",
            escape_html(&self.value),
            escape_html(&self.name),
        )
    }
}
