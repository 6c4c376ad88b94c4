//! Calendar date input field.

use chrono::NaiveDate;

use crate::error::Result;
use crate::escape::escape_html;
use crate::fields::{Field, FieldType};
use crate::messages::Messages;

/// Calendar date input.
///
/// Renders as `<input type="date">` with optional default, minimum and
/// maximum dates, all emitted in ISO `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateField {
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
    /// Date pre-filled into the input
    pub default_value: Option<NaiveDate>,
    /// Earliest accepted date
    pub min: Option<NaiveDate>,
    /// Latest accepted date
    pub max: Option<NaiveDate>,
}

impl DateField {
    /// Create a new date field with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            label: String::new(),
            requested: false,
            help: None,
            default_value: None,
            min: None,
            max: None,
        }
    }

    /// Parse an ISO `YYYY-MM-DD` date string
    pub fn parse_date(s: &str) -> Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
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

    /// Set the default date
    pub fn with_default_value(mut self, date: NaiveDate) -> Self {
        self.default_value = Some(date);
        self
    }

    /// Set the earliest accepted date
    pub fn with_min(mut self, date: NaiveDate) -> Self {
        self.min = Some(date);
        self
    }

    /// Set the latest accepted date
    pub fn with_max(mut self, date: NaiveDate) -> Self {
        self.max = Some(date);
        self
    }
}

impl Field for DateField {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> FieldType {
        FieldType::Date
    }

    fn render_label(&self, messages: &Messages, lang: &str) -> String {
        escape_html(&messages.resolve(&self.label, lang))
    }

    fn render_control(&self, messages: &Messages, lang: &str) -> String {
        let mut html = String::from("<input type=\"date\" class=\"textc\"");
        if let Some(value) = self.default_value {
            html.push_str(&format!(" value=\"{}\"", value.format("%Y-%m-%d")));
        }
        if let Some(min) = self.min {
            html.push_str(&format!(" min=\"{}\"", min.format("%Y-%m-%d")));
        }
        if let Some(max) = self.max {
            html.push_str(&format!(" max=\"{}\"", max.format("%Y-%m-%d")));
        }
        html.push_str(&format!(" name=\"{}\"", escape_html(&self.name)));
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
