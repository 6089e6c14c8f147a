//! Loaded message bundle for one language.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A message bundle: translation keys mapped to localized values.
///
/// The contents are not validated beyond being a JSON object. Nested objects
/// group related messages and can be addressed with dotted paths through
/// [`Locale::message`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale {
    messages: Map<String, Value>,
}

impl Locale {
    pub fn new(messages: Map<String, Value>) -> Self {
        Self { messages }
    }

    /// Parse a bundle from JSON text. The top level must be an object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get a top-level entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.messages.get(key)
    }

    /// Look up a string message by dotted path (e.g., "nav.home").
    ///
    /// Returns `None` if any segment is missing or the leaf is not a string.
    pub fn message(&self, path: &str) -> Option<&str> {
        let mut segments = path.split('.');
        let mut current = self.messages.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        current.as_str()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Map<String, Value>> for Locale {
    fn from(messages: Map<String, Value>) -> Self {
        Self::new(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Locale {
        Locale::from_json(
            r#"{
                "title": "Home",
                "nav": { "search": "Search", "count": 3 },
                "deep": { "a": { "b": "leaf" } }
            }"#,
        )
        .expect("valid bundle")
    }

    #[test]
    fn test_from_json_requires_object() {
        assert!(Locale::from_json("[1, 2, 3]").is_err());
        assert!(Locale::from_json("\"text\"").is_err());
        assert!(Locale::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_message_top_level() {
        assert_eq!(sample().message("title"), Some("Home"));
    }

    #[test]
    fn test_message_nested_path() {
        let locale = sample();
        assert_eq!(locale.message("nav.search"), Some("Search"));
        assert_eq!(locale.message("deep.a.b"), Some("leaf"));
    }

    #[test]
    fn test_message_missing_or_not_string() {
        let locale = sample();
        assert_eq!(locale.message("nav.missing"), None);
        assert_eq!(locale.message("nav.count"), None);
        assert_eq!(locale.message("nav"), None);
        assert_eq!(locale.message("title.extra"), None);
        assert_eq!(locale.message(""), None);
    }

    #[test]
    fn test_keys_and_len() {
        let locale = sample();
        assert_eq!(locale.len(), 3);
        let keys: Vec<&str> = locale.keys().collect();
        assert!(keys.contains(&"title"));
        assert!(keys.contains(&"nav"));
    }

    #[test]
    fn test_get_returns_raw_value() {
        let locale = sample();
        assert_eq!(locale.get("nav").unwrap()["count"], json!(3));
    }
}
