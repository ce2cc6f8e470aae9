//! Parameter mappings passed to URL generation.

use std::fmt::Display;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// An ordered mapping of parameter names to their string form.
///
/// Iteration order is insertion order, which is also the order of the
/// generated query string. Re-inserting a name overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    params: IndexMap<String, String>,
}

impl Params {
    /// Creates new empty params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, storing the value's `Display` form.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.params.insert(key.into(), value.to_string());
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Gets a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns whether a parameter is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns an iterator over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every parameter of `other` into `self`.
    ///
    /// Names already present keep their position and take the new value.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.params.insert(key.to_string(), value.to_string());
        }
    }

    /// Builds params from a JSON object.
    ///
    /// Returns `None` if `value` is not an object. See [`json_to_param`] for
    /// how each value is turned into a string.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_routes::Params;
    /// use serde_json::json;
    ///
    /// let params = Params::from_json(&json!({"id": 134, "name": "drew"})).unwrap();
    /// assert_eq!(params.get("id"), Some("134"));
    /// assert_eq!(params.get("name"), Some("drew"));
    /// ```
    pub fn from_json(value: &Value) -> Option<Self> {
        value.as_object().map(Self::from)
    }

    /// Encodes the params as `k1=v1&k2=v2`.
    ///
    /// Values are percent-encoded, keys are written verbatim. Only
    /// `A-Z a-z 0-9 - _ . ~` are left as-is in values, so `!'()*` are encoded
    /// too. Empty params yield an empty string.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl From<&Map<String, Value>> for Params {
    fn from(map: &Map<String, Value>) -> Self {
        Self {
            params: map
                .iter()
                .map(|(k, v)| (k.clone(), json_to_param(v)))
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Display,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Coerces a JSON value to the string used in a URL.
///
/// Strings are taken verbatim, `null` becomes `"null"`, arrays are joined
/// with `,` and objects are written as compact JSON.
pub fn json_to_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(json_to_param)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut params = Params::new();
        params.insert("a", 1);
        params.insert("b", 2);
        params.insert("a", 3);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_query_string_preserves_order() {
        let params = Params::new().with("id", 1).with("bar", "baz");
        assert_eq!(params.to_query_string(), "id=1&bar=baz");
    }

    #[test]
    fn test_query_string_encodes_values_only() {
        let params = Params::from([("q[]", "a b&c=d/é")]);
        assert_eq!(params.to_query_string(), "q[]=a%20b%26c%3Dd%2F%C3%A9");
    }

    #[test]
    fn test_empty_query_string() {
        assert_eq!(Params::new().to_query_string(), "");
    }

    #[test]
    fn test_contains() {
        let params = Params::new().with("id", 1);
        assert!(params.contains("id"));
        assert!(!params.contains("name"));
    }

    #[test]
    fn test_query_string_encodes_sub_delims() {
        let params = Params::from([("q", "it's (a)*!")]);
        assert_eq!(params.to_query_string(), "q=it%27s%20%28a%29%2A%21");
    }

    #[test]
    fn test_merge() {
        let mut first = Params::from([("id", "1"), ("page", "2")]);
        let second = Params::from([("page", "3"), ("sort", "asc")]);
        first.merge(&second);
        assert_eq!(first.to_query_string(), "id=1&page=3&sort=asc");
    }

    #[test]
    fn test_from_json_keeps_object_order() {
        let params = Params::from_json(&json!({"id": 1, "bar": "baz"})).unwrap();
        assert_eq!(params.to_query_string(), "id=1&bar=baz");
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(Params::from_json(&json!([1, 2])).is_none());
        assert!(Params::from_json(&json!("id")).is_none());
    }

    #[test]
    fn test_json_coercion() {
        assert_eq!(json_to_param(&json!("drew")), "drew");
        assert_eq!(json_to_param(&json!(134)), "134");
        assert_eq!(json_to_param(&json!(1.5)), "1.5");
        assert_eq!(json_to_param(&json!(true)), "true");
        assert_eq!(json_to_param(&json!(null)), "null");
        assert_eq!(json_to_param(&json!([1, "a", [2, 3]])), "1,a,2,3");
        assert_eq!(json_to_param(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
