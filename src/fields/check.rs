//! Checkbox group field.

use crate::escape::escape_html;
use crate::fields::{Field, FieldType};
use crate::messages::Messages;

/// Group of checkboxes sharing one submission name.
///
/// Each option is a message id localized at render time. The control name
/// carries a `[]` suffix so every ticked box is submitted, and each box
/// submits its option index as its value. Boxes are arranged in a borderless
/// table, wrapping to a new row after every `length` options; a `length` of
/// zero keeps all options on a single row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckField {
    /// Loader-assigned numeric id
    pub id: u32,
    /// Field name; rendered with a `[]` suffix
    pub name: String,
    /// Label message id
    pub label: String,
    /// Whether the field is marked as required in its definition
    pub requested: bool,
    /// Help message id shown as each checkbox's title attribute
    pub help: Option<String>,
    /// Option message ids, one checkbox per entry
    pub options: Vec<String>,
    /// Indexes of options checked by default
    pub checked: Vec<usize>,
    /// Checkboxes per table row; 0 puts everything on one row
    pub length: u32,
}

impl CheckField {
    /// Create a new checkbox group with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            label: String::new(),
            requested: false,
            help: None,
            options: Vec::new(),
            checked: Vec::new(),
            length: 5,
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

    /// Replace the option list
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Append a single option message id
    pub fn add_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Set the option indexes checked by default
    pub fn with_checked(mut self, checked: Vec<usize>) -> Self {
        self.checked = checked;
        self
    }

    /// Set how many checkboxes share a table row
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Get the option message id at the given index, or `"?"` when out of range
    pub fn option(&self, index: usize) -> &str {
        self.options.get(index).map(String::as_str).unwrap_or("?")
    }
}

impl Field for CheckField {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> FieldType {
        FieldType::Check
    }

    fn render_label(&self, messages: &Messages, lang: &str) -> String {
        escape_html(&messages.resolve(&self.label, lang))
    }

    fn render_control(&self, messages: &Messages, lang: &str) -> String {
        let mut html = String::from("<table border=\"0\"><tr>");
        for (i, option) in self.options.iter().enumerate() {
            if self.length > 0 && i > 0 && i % self.length as usize == 0 {
                html.push_str("</tr><tr>");
            }
            html.push_str(&format!(
                "<td><input type=\"checkbox\" name=\"{}[]\" value=\"{}\"",
                escape_html(&self.name),
                i
            ));
            if let Some(help) = &self.help {
                html.push_str(&format!(
                    " title=\"{}\"",
                    escape_html(&messages.resolve(help, lang))
                ));
            }
            if self.checked.contains(&i) {
                html.push_str(" checked=\"checked\"");
            }
            html.push_str(&format!(
                " />{}</td>",
                escape_html(&messages.resolve(option, lang))
            ));
        }
        html.push_str("</tr></table>");
        html
    }
}
