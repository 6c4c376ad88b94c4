//! Form definition and HTML rendering.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{FormError, Result};
use crate::escape::escape_html;
use crate::fields::{Field, FormField};
use crate::messages::Messages;

/// HTTP method used to submit a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Submit via HTTP GET
    Get,
    /// Submit via HTTP POST
    Post,
}

impl Method {
    /// Parse a method string, case-insensitively.
    ///
    /// Accepts `get` and `post` in any letter case.
    pub fn parse(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("get") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Ok(Method::Post)
        } else {
            Err(FormError::InvalidMethod(s.to_string()))
        }
    }

    /// Get the lowercase attribute value for the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Post
    }
}

/// Table arrangement of a form's labels and controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// One row of all labels, then one row of all controls
    Horizontal,
    /// One row per field: label cell, then control cell
    Vertical,
}

impl Layout {
    /// Parse a layout string, case-insensitively.
    ///
    /// Accepts `horizontal` and `vertical` in any letter case.
    pub fn parse(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("horizontal") {
            Ok(Layout::Horizontal)
        } else if s.eq_ignore_ascii_case("vertical") {
            Ok(Layout::Vertical)
        } else {
            Err(FormError::InvalidLayout(s.to_string()))
        }
    }

    /// Get the lowercase name of the layout
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Horizontal => "horizontal",
            Layout::Vertical => "vertical",
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Vertical
    }
}

/// An HTML form definition.
///
/// Holds the form's identity, submission settings, ordered field list and
/// message catalog, and renders the whole thing into HTML with
/// [`Form::generate`]. Fields render in insertion order; all visible text is
/// resolved through the catalog with the requested language.
///
/// # Example
///
/// ```rust
/// use formapi::{Form, TextField};
///
/// let mut form = Form::new("login");
/// form.set_target("login.php");
/// form.set_title("t1");
/// form.add_message("t1", "en", "Sign in");
/// form.add_message("u1", "en", "User name");
/// form.add_field(TextField::new("user").with_label("u1"));
///
/// let html = form.generate("en", false);
/// assert!(html.contains("<form id=\"login\" class=\"formc\" action=\"login.php\""));
/// assert!(html.contains("<td class=\"labelc\">User name</td>"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Form {
    id: String,
    name: Option<String>,
    method: Method,
    title: Option<String>,
    layout: Layout,
    target: Option<String>,
    fields: Vec<FormField>,
    messages: Messages,
}

impl Form {
    /// Create a new form with the given id.
    ///
    /// The form starts with POST submission, vertical layout, no target and
    /// no fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            method: Method::Post,
            title: None,
            layout: Layout::Vertical,
            target: None,
            fields: Vec::new(),
            messages: Messages::new(),
        }
    }

    /// Get the form id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the form name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the form name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Get the submission method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Set the submission method
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Set the submission method from its string form.
    ///
    /// Accepts `get` and `post` in any letter case. Anything else is
    /// rejected and the current method is kept.
    pub fn set_method_str(&mut self, method: &str) {
        match Method::parse(method) {
            Ok(parsed) => self.method = parsed,
            Err(_) => {
                warn!(
                    "ignoring invalid form method '{}', keeping '{}'",
                    method,
                    self.method.as_str()
                );
            }
        }
    }

    /// Get the title message id
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the title message id
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Get the layout
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Set the layout
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Set the layout from its string form.
    ///
    /// Accepts `horizontal` and `vertical` in any letter case. Anything else
    /// is rejected and the current layout is kept.
    pub fn set_layout_str(&mut self, layout: &str) {
        match Layout::parse(layout) {
            Ok(parsed) => self.layout = parsed,
            Err(_) => {
                warn!(
                    "ignoring invalid form layout '{}', keeping '{}'",
                    layout,
                    self.layout.as_str()
                );
            }
        }
    }

    /// Get the target URL the form submits to
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Set the target URL.
    ///
    /// A blank or whitespace-only target is rejected and the current target
    /// is kept.
    pub fn set_target(&mut self, target: &str) {
        if target.trim().is_empty() {
            warn!("ignoring blank form target, keeping current value");
        } else {
            self.target = Some(target.to_string());
        }
    }

    /// Set the target URL, reporting a blank target as an error
    pub fn try_set_target(&mut self, target: &str) -> Result<()> {
        if target.trim().is_empty() {
            return Err(FormError::EmptyTarget);
        }
        self.target = Some(target.to_string());
        Ok(())
    }

    /// Get the fields in render order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Get mutable access to the field list
    pub fn fields_mut(&mut self) -> &mut Vec<FormField> {
        &mut self.fields
    }

    /// Replace the field list
    pub fn set_fields(&mut self, fields: Vec<FormField>) {
        self.fields = fields;
    }

    /// Append a field to the end of the render order
    pub fn add_field(&mut self, field: impl Into<FormField>) {
        self.fields.push(field.into());
    }

    /// Get the message catalog
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Get mutable access to the message catalog
    pub fn messages_mut(&mut self) -> &mut Messages {
        &mut self.messages
    }

    /// Replace the message catalog
    pub fn set_messages(&mut self, messages: Messages) {
        self.messages = messages;
    }

    /// Add one localized message to the catalog
    pub fn add_message(
        &mut self,
        id: impl Into<String>,
        lang: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.messages.insert(id, lang, text);
    }

    /// Get the localized text for a message id.
    ///
    /// Falls back to the id itself when no translation exists; this never
    /// fails.
    pub fn msg(&self, id: &str, lang: &str) -> String {
        self.messages.resolve(id, lang)
    }

    /// Find the first field with the given name
    pub fn find_field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Check the form definition for problems the setters cannot catch.
    ///
    /// Rejects a form without a submission target and duplicate field names,
    /// which would collide as submission keys. Rendering itself never
    /// validates; this step is opt-in.
    pub fn validate(&self) -> Result<()> {
        if self.target.as_deref().map_or(true, |t| t.trim().is_empty()) {
            return Err(FormError::EmptyTarget);
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name()) {
                return Err(FormError::DuplicateField(field.name().to_string()));
            }
        }
        Ok(())
    }

    /// Render the form to HTML.
    ///
    /// When `full` is true the form is wrapped in a complete HTML document
    /// whose `<title>` is the localized form title. Otherwise only the
    /// `<form>` element is produced. All message ids are resolved with
    /// `lang`, falling back to the id itself for missing translations.
    pub fn generate(&self, lang: &str, full: bool) -> String {
        debug!(
            "rendering form '{}' ({} fields, {} layout, lang '{}')",
            self.id,
            self.fields.len(),
            self.layout.as_str(),
            lang
        );

        let title_text = match &self.title {
            Some(id) => escape_html(&self.messages.resolve(id, lang)),
            None => String::new(),
        };

        let mut html = String::new();
        if full {
            html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
            html.push_str(&format!("<title>{}</title></head><body>", title_text));
        }

        html.push_str(&format!(
            "<form id=\"{}\" class=\"formc\" action=\"{}\" method=\"{}\" enctype=\"multipart/form-data\">",
            escape_html(&self.id),
            escape_html(self.target.as_deref().unwrap_or("")),
            self.method.as_str(),
        ));
        html.push_str(&format!("<p class=\"titlec\">{}</p>", title_text));
        html.push_str("<table class=\"formtable\">");

        match self.layout {
            Layout::Horizontal => {
                html.push_str("<tr>");
                for field in &self.fields {
                    html.push_str(&format!(
                        "<td class=\"labelc\">{}</td>",
                        field.render_label(&self.messages, lang)
                    ));
                }
                html.push_str("</tr><tr>");
                for field in &self.fields {
                    html.push_str(&format!(
                        "<td class=\"formfield\">{}</td>",
                        field.render_control(&self.messages, lang)
                    ));
                }
                html.push_str("</tr>");
            }
            Layout::Vertical => {
                for field in &self.fields {
                    html.push_str(&format!(
                        "<tr><td class=\"labelc\">{}</td><td class=\"formfield\">{}</td></tr>",
                        field.render_label(&self.messages, lang),
                        field.render_control(&self.messages, lang),
                    ));
                }
            }
        }

        html.push_str("</table></form>");
        if full {
            html.push_str("</body></html>");
        }
        html
    }

    /// Render the form and write the HTML to a file
    pub fn save(&self, path: impl AsRef<Path>, lang: &str, full: bool) -> Result<()> {
        let html = self.generate(lang, full);
        std::fs::write(path, html)?;
        Ok(())
    }

    /// Render the form and write the HTML to a writer
    pub fn write<W: std::io::Write>(&self, writer: &mut W, lang: &str, full: bool) -> Result<()> {
        writer.write_all(self.generate(lang, full).as_bytes())?;
        Ok(())
    }
}
