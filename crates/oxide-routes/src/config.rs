//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration fixed for the lifetime of a [`Routes`](crate::Routes) registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Prepended verbatim to every template before resolution.
    #[serde(alias = "baseUrl")]
    pub base_url: String,
}

impl RoutesConfig {
    /// Creates a config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Parses a config from JSON.
    ///
    /// Missing fields fall back to their defaults, so `{}` is a valid config.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_routes::RoutesConfig;
    ///
    /// let config = RoutesConfig::from_json(r#"{"baseUrl": "http://myapi.com/api"}"#).unwrap();
    /// assert_eq!(config.base_url, "http://myapi.com/api");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidConfig`](crate::RouteError::InvalidConfig)
    /// if the input is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
