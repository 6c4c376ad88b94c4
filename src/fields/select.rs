//! Selection list field.

use crate::escape::escape_html;
use crate::fields::{Field, FieldType};
use crate::messages::Messages;

/// Dropdown or multi-selection list.
///
/// Options are message ids localized at render time; each option submits its
/// index as its value. A multiple-selection list renders the control name
/// with a `[]` suffix so every chosen option is submitted, and `size` turns
/// the dropdown into a list showing that many rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectField {
    /// Loader-assigned numeric id
    pub id: u32,
    /// Field name; rendered with a `[]` suffix when `multiple` is set
    pub name: String,
    /// Label message id
    pub label: String,
    /// Whether the field is marked as required in its definition
    pub requested: bool,
    /// Help message id shown as the control's title attribute
    pub help: Option<String>,
    /// Option message ids, one entry per choice
    pub options: Vec<String>,
    /// Indexes of options selected by default
    pub selected: Vec<usize>,
    /// Allow selecting more than one option
    pub multiple: bool,
    /// Visible rows; `None` renders a dropdown
    pub size: Option<u32>,
}

impl SelectField {
    /// Create a new selection list with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            label: String::new(),
            requested: false,
            help: None,
            options: Vec::new(),
            selected: Vec::new(),
            multiple: false,
            size: None,
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

    /// Set the option indexes selected by default
    pub fn with_selected(mut self, selected: Vec<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Allow multiple selections
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Show the list with the given number of visible rows
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Get the option message id at the given index, or `"?"` when out of range
    pub fn option(&self, index: usize) -> &str {
        self.options.get(index).map(String::as_str).unwrap_or("?")
    }
}

impl Field for SelectField {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> FieldType {
        FieldType::Select
    }

    fn render_label(&self, messages: &Messages, lang: &str) -> String {
        escape_html(&messages.resolve(&self.label, lang))
    }

    fn render_control(&self, messages: &Messages, lang: &str) -> String {
        let suffix = if self.multiple { "[]" } else { "" };
        let mut html = format!("<select name=\"{}{}\"", escape_html(&self.name), suffix);
        if self.multiple {
            html.push_str(" multiple=\"multiple\"");
        }
        if let Some(size) = self.size {
            html.push_str(&format!(" size=\"{}\"", size));
        }
        if let Some(help) = &self.help {
            html.push_str(&format!(
                " title=\"{}\"",
                escape_html(&messages.resolve(help, lang))
            ));
        }
        html.push('>');
        for (i, option) in self.options.iter().enumerate() {
            let selected = if self.selected.contains(&i) {
                " selected=\"selected\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>",
                i,
                selected,
                escape_html(&messages.resolve(option, lang))
            ));
        }
        html.push_str("</select>");
        html
    }
}
