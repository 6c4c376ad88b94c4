//! HTML escaping for rendered form content.
//!
//! Every message lookup result, option text, default value, name and target
//! passes through [`escape_html`] on its way into the generated markup.
//! Class attribute literals are compile-time constants and are not escaped.

/// Escape a string for use in HTML text content or a double-quoted
/// attribute value.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("Email address"), "Email address");
    }

    #[test]
    fn test_escape_ampersand_first() {
        // A pre-escaped entity is escaped again, never double-unescaped
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_tags() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_attribute_quotes() {
        assert_eq!(
            escape_html(r#"a "quoted" value"#),
            "a &quot;quoted&quot; value"
        );
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(escape_html(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape_html(""), "");
    }
}
