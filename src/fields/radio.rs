//! Radio button group field.

use crate::escape::escape_html;
use crate::fields::{Field, FieldType};
use crate::messages::Messages;

/// Group of radio buttons sharing one submission name.
///
/// Options are message ids localized at render time; each button submits its
/// option index as its value. At most one option is selected. The buttons use
/// the same borderless table grid as [`crate::CheckField`], wrapping after
/// every `length` options.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadioField {
    /// Loader-assigned numeric id
    pub id: u32,
    /// Field name (HTML control name)
    pub name: String,
    /// Label message id
    pub label: String,
    /// Whether the field is marked as required in its definition
    pub requested: bool,
    /// Help message id shown as each button's title attribute
    pub help: Option<String>,
    /// Option message ids, one radio button per entry
    pub options: Vec<String>,
    /// Index of the option selected by default
    pub selected: Option<usize>,
    /// Buttons per table row; 0 puts everything on one row
    pub length: u32,
}

impl RadioField {
    /// Create a new radio button group with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            label: String::new(),
            requested: false,
            help: None,
            options: Vec::new(),
            selected: None,
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

    /// Set the option index selected by default
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    /// Set how many buttons share a table row
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Get the option message id at the given index, or `"?"` when out of range
    pub fn option(&self, index: usize) -> &str {
        self.options.get(index).map(String::as_str).unwrap_or("?")
    }
}

impl Field for RadioField {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> FieldType {
        FieldType::Radio
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
                "<td><input type=\"radio\" name=\"{}\" value=\"{}\"",
                escape_html(&self.name),
                i
            ));
            if let Some(help) = &self.help {
                html.push_str(&format!(
                    " title=\"{}\"",
                    escape_html(&messages.resolve(help, lang))
                ));
            }
            if self.selected == Some(i) {
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
