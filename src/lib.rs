//! # formapi
//!
//! A server-side HTML form definition and rendering library.
//!
//! Forms are described declaratively: a [`Form`] owns an ordered list of
//! fields and a localized message catalog, and renders the whole definition
//! into an HTML table in one pass. Field labels, option texts, titles and
//! help texts are message ids resolved against the catalog at render time,
//! so one definition serves any number of languages.
//!
//! ## Features
//!
//! - **Eight field types**: text (plain and password), checkbox groups,
//!   radio groups, selection lists, date inputs, text areas, hidden values
//!   and submit buttons
//! - **Two table layouts**: vertical (label and control per row) and
//!   horizontal (a row of labels over a row of controls)
//! - **Localization with graceful fallback**: missing translations render
//!   the message id instead of failing
//! - **Fragment or full document output**: render just the `<form>` element
//!   or a complete HTML page
//!
//! ## Quick Start
//!
//! ```rust
//! use formapi::{Form, SubmitField, TextField};
//!
//! let mut form = Form::new("contact");
//! form.set_target("submit.php");
//! form.set_title("title");
//!
//! form.add_message("title", "en", "Contact us");
//! form.add_message("name", "en", "Your name");
//! form.add_message("send", "en", "Send");
//!
//! form.add_field(TextField::new("name").with_label("name"));
//! form.add_field(SubmitField::new("send").with_label("send"));
//!
//! let html = form.generate("en", true);
//! assert!(html.contains("<title>Contact us</title>"));
//! assert!(html.contains("name=\"name\""));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for form definitions, fields and
//!   message catalogs

pub mod error;
pub mod escape;
pub mod fields;
pub mod form;
pub mod messages;

pub use error::{FormError, Result};
pub use escape::escape_html;
pub use fields::{
    CheckField, DateField, Field, FieldType, FormField, HiddenField, RadioField, SelectField,
    SubmitField, TextAreaField, TextField,
};
pub use form::{Form, Layout, Method};
pub use messages::Messages;

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
