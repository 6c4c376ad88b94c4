//! Multi-line text area field.

use crate::escape::escape_html;
use crate::fields::{Field, FieldType};
use crate::messages::Messages;

/// Multi-line text input.
///
/// Renders as a `<textarea>` with the `textc` class and a fixed row/column
/// size; the default value becomes the element's escaped text content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAreaField {
    /// Loader-assigned numeric id
    pub id: u32,
    /// Field name (HTML control name)
    pub name: String,
    /// Label message id
    pub label: String,
    /// Whether the field is marked as required in its definition
    pub requested: bool,
    /// Help message id shown as the control's title attribute
    pub help: Option<String>,
    /// Default text content
    pub default_value: String,
    /// Visible rows
    pub rows: u32,
    /// Visible columns
    pub cols: u32,
}

impl TextAreaField {
    /// Create a new text area with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            label: String::new(),
            requested: false,
            help: None,
            default_value: String::new(),
            rows: 4,
            cols: 40,
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

    /// Mark the field as required
    pub fn with_requested(mut self, requested: bool) -> Self {
        self.requested = requested;
        self
    }

    /// Set the help message id
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Set the default text content
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Set the number of visible rows
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of visible columns
    pub fn with_cols(mut self, cols: u32) -> Self {
        self.cols = cols;
        self
    }
}

impl Field for TextAreaField {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> FieldType {
        FieldType::TextArea
    }

    fn render_label(&self, messages: &Messages, lang: &str) -> String {
        escape_html(&messages.resolve(&self.label, lang))
    }

    fn render_control(&self, messages: &Messages, lang: &str) -> String {
        let mut html = format!(
            "<textarea class=\"textc\" rows=\"{}\" cols=\"{}\" name=\"{}\"",
            self.rows,
            self.cols,
            escape_html(&self.name),
        );
        if let Some(help) = &self.help {
            html.push_str(&format!(
                " title=\"{}\"",
                escape_html(&messages.resolve(help, lang))
            ));
        }
        html.push_str(&format!(">{}</textarea>", escape_html(&self.default_value)));
        html
    }
}
