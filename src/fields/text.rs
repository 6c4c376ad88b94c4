//! Single-line text input field.

use crate::escape::escape_html;
use crate::fields::{Field, FieldType};
use crate::messages::Messages;

/// Single-line text input, optionally rendered as a password input.
///
/// Renders as `<input type="text">` (or `type="password"`) with the `textc`
/// class, a visible size and a maximum accepted length.
///
/// # Example
///
/// ```rust
/// use formapi::{Field, Messages, TextField};
///
/// let field = TextField::new("email").with_label("10");
/// let messages = Messages::new();
///
/// assert_eq!(
///     field.render_control(&messages, "en"),
///     "<input type=\"text\" class=\"textc\" maxlength=\"50\" size=\"20\" value=\"\" name=\"email\" />"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextField {
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
    /// Default value pre-filled into the input
    pub default_value: String,
    /// Visible width of the input in characters
    pub length: u32,
    /// Maximum number of characters accepted
    pub max_length: u32,
    /// Render as a password input instead of a plain text input
    pub password: bool,
}

impl TextField {
    /// Create a new text field with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            label: String::new(),
            requested: false,
            help: None,
            default_value: String::new(),
            length: 20,
            max_length: 50,
            password: false,
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

    /// Set the default value
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Set the visible width in characters
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Set the maximum number of characters accepted
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    /// Render as a password input
    pub fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }
}

impl Field for TextField {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> FieldType {
        FieldType::Text
    }

    fn render_label(&self, messages: &Messages, lang: &str) -> String {
        escape_html(&messages.resolve(&self.label, lang))
    }

    fn render_control(&self, messages: &Messages, lang: &str) -> String {
        let input_type = if self.password { "password" } else { "text" };
        let mut html = format!(
            "<input type=\"{}\" class=\"textc\" maxlength=\"{}\" size=\"{}\" value=\"{}\" name=\"{}\"",
            input_type,
            self.max_length,
            self.length,
            escape_html(&self.default_value),
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
