//! Incoming request type and query-string access.

use std::collections::HashMap;

/// An incoming request, reduced to what the action layer needs: the method
/// (for logging only — routing ignores it), the literal path, and the parsed
/// query string.
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) query: Query,
}

impl Request {
    pub(crate) fn new(method: String, path: String, query: Query) -> Self {
        Self { method, path, query }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The parsed query parameters.
    pub fn query(&self) -> &Query {
        &self.query
    }
}

/// Query parameters as a key → value map.
///
/// Keys and values are percent-decoded. A repeated key keeps its last
/// occurrence: `?id=1&id=2` reads as `id=2`.
pub struct Query(HashMap<String, String>);

impl Query {
    /// Parses a raw query string (without the leading `?`).
    pub(crate) fn parse(raw: &str) -> Self {
        let mut params = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            params.insert(key.into_owned(), value.into_owned());
        }
        Self(params)
    }

    /// Returns the value for `key`, if the parameter is present.
    ///
    /// A parameter with an empty value (`?content=`) is present and returns
    /// `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` appeared in the query string at all.
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        let query = Query::parse("id=7&content=hello");
        assert_eq!(query.get("id"), Some("7"));
        assert_eq!(query.get("content"), Some("hello"));
        assert!(!query.has("missing"));
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let query = Query::parse("id=1&id=2");
        assert_eq!(query.get("id"), Some("2"));
    }

    #[test]
    fn empty_value_is_present() {
        let query = Query::parse("content=");
        assert!(query.has("content"));
        assert_eq!(query.get("content"), Some(""));
    }

    #[test]
    fn percent_decodes() {
        let query = Query::parse("content=hello%20world%21");
        assert_eq!(query.get("content"), Some("hello world!"));
    }

    #[test]
    fn empty_query_has_nothing() {
        let query = Query::parse("");
        assert!(!query.has("id"));
    }
}
