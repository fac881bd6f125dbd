//! Query string handling

use url::form_urlencoded;

/// Ordered key/value pairs of a query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, replacing an existing value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Remove every value for `key`
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as a search string: `?a=1&b=2`, or empty when there are no pairs
    pub fn to_search(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish();
        format!("?{}", body)
    }
}

/// Parse a search string (with or without the leading `?`)
///
/// Malformed percent escapes are kept verbatim; pairs without `=` get an
/// empty value.
pub fn parse_query(search: &str) -> QueryParams {
    let body = search.strip_prefix('?').unwrap_or(search);
    let pairs = form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();
    QueryParams { pairs }
}
