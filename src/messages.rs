//! Localized message catalog.
//!
//! Forms never carry display text directly: labels, titles, help texts and
//! option captions are message ids resolved against a [`Messages`] catalog at
//! render time. A message id is a plain string key; numeric ids from a
//! definition file appear as their decimal text ("10"). The catalog is
//! normally populated by an external definition loader.

use std::collections::HashMap;

/// Multilingual message table: message id → language code → text.
///
/// Lookup follows the fallback-to-id policy: a missing id or a missing
/// translation resolves to the id itself as display text. That is the
/// defined behavior for untranslated messages, not an error path.
///
/// # Example
///
/// ```rust
/// use formapi::Messages;
///
/// let mut messages = Messages::new();
/// messages.insert("10", "en", "Email");
/// messages.insert("10", "hu", "E-mail cím");
///
/// assert_eq!(messages.resolve("10", "en"), "Email");
/// assert_eq!(messages.resolve("10", "de"), "10"); // no German translation
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Messages {
    entries: HashMap<String, HashMap<String, String>>,
}

impl Messages {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the text of a message for one language.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        lang: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.entries
            .entry(id.into())
            .or_default()
            .insert(lang.into(), text.into());
    }

    /// Get the text of a message in one language, if present.
    pub fn get(&self, id: &str, lang: &str) -> Option<&str> {
        self.entries
            .get(id)
            .and_then(|langs| langs.get(lang))
            .map(|s| s.as_str())
    }

    /// Resolve a message to display text: the stored translation when
    /// present, otherwise the id itself, verbatim. Never fails.
    pub fn resolve(&self, id: &str, lang: &str) -> String {
        match self.get(id, lang) {
            Some(text) => text.to_string(),
            None => id.to_string(),
        }
    }

    /// Whether any language is registered for this message id.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of distinct message ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no messages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut messages = Messages::new();
        messages.insert("10", "en", "Email");
        messages.insert("10", "hu", "E-mail cím");

        assert_eq!(messages.get("10", "en"), Some("Email"));
        assert_eq!(messages.get("10", "hu"), Some("E-mail cím"));
        assert_eq!(messages.get("10", "de"), None);
        assert_eq!(messages.get("11", "en"), None);
    }

    #[test]
    fn test_resolve_present() {
        let mut messages = Messages::new();
        messages.insert("title", "en", "Sign up");

        assert_eq!(messages.resolve("title", "en"), "Sign up");
    }

    #[test]
    fn test_resolve_falls_back_to_id() {
        let mut messages = Messages::new();
        messages.insert("10", "en", "Email");

        // Missing language: the id is the display text
        assert_eq!(messages.resolve("10", "fr"), "10");
        // Missing id entirely
        assert_eq!(messages.resolve("99", "en"), "99");
        // String ids fall back verbatim too
        assert_eq!(messages.resolve("greeting", "en"), "greeting");
    }

    #[test]
    fn test_insert_replaces() {
        let mut messages = Messages::new();
        messages.insert("1", "en", "Old");
        messages.insert("1", "en", "New");

        assert_eq!(messages.get("1", "en"), Some("New"));
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_len_counts_ids_not_translations() {
        let mut messages = Messages::new();
        assert!(messages.is_empty());

        messages.insert("1", "en", "One");
        messages.insert("1", "hu", "Egy");
        messages.insert("2", "en", "Two");

        assert_eq!(messages.len(), 2);
        assert!(!messages.is_empty());
        assert!(messages.contains("1"));
        assert!(!messages.contains("3"));
    }
}
