//! Form field definitions.
//!
//! This module provides the form input abstractions: text inputs, checkbox
//! and radio groups, selection lists, date inputs, text areas, hidden values
//! and submit buttons. Every variant renders its own label and control
//! markup given a message catalog and a language code; the owning
//! [`crate::Form`] arranges the results into its table layout.

mod area;
mod check;
mod date;
mod hidden;
mod radio;
mod select;
mod submit;
mod text;

pub use area::TextAreaField;
pub use check::CheckField;
pub use date::DateField;
pub use hidden::HiddenField;
pub use radio::RadioField;
pub use select::SelectField;
pub use submit::SubmitField;
pub use text::TextField;

use crate::messages::Messages;

/// Type of form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldType {
    /// Single-line (or password) text input
    Text,
    /// Checkbox group
    Check,
    /// Radio button group
    Radio,
    /// Selection list / dropdown
    Select,
    /// Calendar date input
    Date,
    /// Multi-line text area
    TextArea,
    /// Hidden value
    Hidden,
    /// Submit button
    Submit,
}

impl FieldType {
    /// Get the field type discriminator string
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Check => "check",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::Date => "date",
            FieldType::TextArea => "textarea",
            FieldType::Hidden => "hidden",
            FieldType::Submit => "submit",
        }
    }
}

/// Shared capability of every form field.
///
/// A field renders two pieces of markup: its label (placed by the form in a
/// `labelc` table cell) and its control (placed in a `formfield` cell). A
/// label is the escaped localized label message and nothing else; fields
/// without a visible label (hidden, submit) return an empty string.
pub trait Field {
    /// Get the field name used as the HTML control name/submission key
    fn name(&self) -> &str;

    /// Get the field type
    fn field_type(&self) -> FieldType;

    /// Render the label markup for this field
    fn render_label(&self, messages: &Messages, lang: &str) -> String;

    /// Render the control markup for this field
    fn render_control(&self, messages: &Messages, lang: &str) -> String;
}

/// A form field of any supported type.
///
/// The closed set of variants the form renders. Concrete field structs
/// convert into it via `From`, so fields can be attached directly:
///
/// ```rust
/// use formapi::{Form, TextField};
///
/// let mut form = Form::new("f1");
/// form.add_field(TextField::new("email").with_label("10"));
/// assert_eq!(form.fields().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum FormField {
    /// Single-line text input
    Text(TextField),
    /// Checkbox group
    Check(CheckField),
    /// Radio button group
    Radio(RadioField),
    /// Selection list
    Select(SelectField),
    /// Date input
    Date(DateField),
    /// Multi-line text area
    TextArea(TextAreaField),
    /// Hidden value
    Hidden(HiddenField),
    /// Submit button
    Submit(SubmitField),
}

impl FormField {
    /// Get the loader-assigned numeric id of the field
    pub fn id(&self) -> u32 {
        match self {
            FormField::Text(f) => f.id,
            FormField::Check(f) => f.id,
            FormField::Radio(f) => f.id,
            FormField::Select(f) => f.id,
            FormField::Date(f) => f.id,
            FormField::TextArea(f) => f.id,
            FormField::Hidden(f) => f.id,
            FormField::Submit(f) => f.id,
        }
    }

    /// Get the label message id
    pub fn label(&self) -> &str {
        match self {
            FormField::Text(f) => &f.label,
            FormField::Check(f) => &f.label,
            FormField::Radio(f) => &f.label,
            FormField::Select(f) => &f.label,
            FormField::Date(f) => &f.label,
            FormField::TextArea(f) => &f.label,
            FormField::Hidden(f) => &f.label,
            FormField::Submit(f) => &f.label,
        }
    }

    /// Get the help message id, if any
    pub fn help(&self) -> Option<&str> {
        match self {
            FormField::Text(f) => f.help.as_deref(),
            FormField::Check(f) => f.help.as_deref(),
            FormField::Radio(f) => f.help.as_deref(),
            FormField::Select(f) => f.help.as_deref(),
            FormField::Date(f) => f.help.as_deref(),
            FormField::TextArea(f) => f.help.as_deref(),
            FormField::Hidden(f) => f.help.as_deref(),
            FormField::Submit(f) => f.help.as_deref(),
        }
    }

    /// Whether the field is marked as requested (required) in its definition
    pub fn requested(&self) -> bool {
        match self {
            FormField::Text(f) => f.requested,
            FormField::Check(f) => f.requested,
            FormField::Radio(f) => f.requested,
            FormField::Select(f) => f.requested,
            FormField::Date(f) => f.requested,
            FormField::TextArea(f) => f.requested,
            FormField::Hidden(f) => f.requested,
            FormField::Submit(f) => f.requested,
        }
    }
}

impl Field for FormField {
    fn name(&self) -> &str {
        match self {
            FormField::Text(f) => f.name(),
            FormField::Check(f) => f.name(),
            FormField::Radio(f) => f.name(),
            FormField::Select(f) => f.name(),
            FormField::Date(f) => f.name(),
            FormField::TextArea(f) => f.name(),
            FormField::Hidden(f) => f.name(),
            FormField::Submit(f) => f.name(),
        }
    }

    fn field_type(&self) -> FieldType {
        match self {
            FormField::Text(f) => f.field_type(),
            FormField::Check(f) => f.field_type(),
            FormField::Radio(f) => f.field_type(),
            FormField::Select(f) => f.field_type(),
            FormField::Date(f) => f.field_type(),
            FormField::TextArea(f) => f.field_type(),
            FormField::Hidden(f) => f.field_type(),
            FormField::Submit(f) => f.field_type(),
        }
    }

    fn render_label(&self, messages: &Messages, lang: &str) -> String {
        match self {
            FormField::Text(f) => f.render_label(messages, lang),
            FormField::Check(f) => f.render_label(messages, lang),
            FormField::Radio(f) => f.render_label(messages, lang),
            FormField::Select(f) => f.render_label(messages, lang),
            FormField::Date(f) => f.render_label(messages, lang),
            FormField::TextArea(f) => f.render_label(messages, lang),
            FormField::Hidden(f) => f.render_label(messages, lang),
            FormField::Submit(f) => f.render_label(messages, lang),
        }
    }

    fn render_control(&self, messages: &Messages, lang: &str) -> String {
        match self {
            FormField::Text(f) => f.render_control(messages, lang),
            FormField::Check(f) => f.render_control(messages, lang),
            FormField::Radio(f) => f.render_control(messages, lang),
            FormField::Select(f) => f.render_control(messages, lang),
            FormField::Date(f) => f.render_control(messages, lang),
            FormField::TextArea(f) => f.render_control(messages, lang),
            FormField::Hidden(f) => f.render_control(messages, lang),
            FormField::Submit(f) => f.render_control(messages, lang),
        }
    }
}

impl From<TextField> for FormField {
    fn from(field: TextField) -> Self {
        FormField::Text(field)
    }
}

impl From<CheckField> for FormField {
    fn from(field: CheckField) -> Self {
        FormField::Check(field)
    }
}

impl From<RadioField> for FormField {
    fn from(field: RadioField) -> Self {
        FormField::Radio(field)
    }
}

impl From<SelectField> for FormField {
    fn from(field: SelectField) -> Self {
        FormField::Select(field)
    }
}

impl From<DateField> for FormField {
    fn from(field: DateField) -> Self {
        FormField::Date(field)
    }
}

impl From<TextAreaField> for FormField {
    fn from(field: TextAreaField) -> Self {
        FormField::TextArea(field)
    }
}

impl From<HiddenField> for FormField {
    fn from(field: HiddenField) -> Self {
        FormField::Hidden(field)
    }
}

impl From<SubmitField> for FormField {
    fn from(field: SubmitField) -> Self {
        FormField::Submit(field)
    }
}
