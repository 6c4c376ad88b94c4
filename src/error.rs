use thiserror::Error;

/// Errors surfaced by the explicit, opt-in surfaces of the crate.
///
/// Configuration setters never return these; invalid setter input is
/// ignored and the prior value retained (see [`crate::Form`]). Errors appear
/// only where the caller asks for them: [`crate::Method::parse`],
/// [`crate::Layout::parse`], date parsing, [`crate::Form::validate`] and
/// [`crate::Form::save`].
#[derive(Error, Debug)]
pub enum FormError {
    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Request method other than GET or POST
    #[error("Invalid form method: {0} (must be get or post)")]
    InvalidMethod(String),

    /// Layout name other than horizontal or vertical
    #[error("Invalid layout: {0} (must be horizontal or vertical)")]
    InvalidLayout(String),

    /// Form target is missing or blank
    #[error("Empty form target")]
    EmptyTarget,

    /// Two fields share the same submission name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// Date value that chrono could not parse
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::format::ParseError),
}

pub type Result<T> = std::result::Result<T, FormError>;
