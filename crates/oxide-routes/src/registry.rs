//! Named route registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::RoutesConfig;
use crate::error::{Result, RouteError};
use crate::params::Params;
use crate::template;

/// A registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route key.
    pub key: String,
    /// URL template, without the base URL.
    pub template: String,
}

/// Key and path prefixes applied by [`Routes::prefix`].
///
/// Both default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefix {
    /// Prepended to every template, with no separator.
    path: String,
    /// Prepended to every key as `{name}_`.
    name: String,
}

impl Prefix {
    /// Creates an empty prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path prefix.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the name prefix.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn key(&self, short_key: &str) -> String {
        if self.name.is_empty() {
            short_key.to_string()
        } else {
            format!("{}_{short_key}", self.name)
        }
    }

    fn path_for(&self, template: &str) -> String {
        format!("{}{template}", self.path)
    }
}

/// Read access shared by [`Routes`] and its locked view.
pub trait RouteSource {
    /// Generates the URL for `key`, or `None` if it is not registered.
    fn generate(&self, key: &str, path_params: &Params, query_params: &Params) -> Option<String>;

    /// Returns every registered route in insertion order.
    fn all(&self) -> Vec<RouteEntry>;
}

/// A registry of named URL templates.
///
/// # Example
///
/// ```
/// use oxide_routes::{Params, Routes};
///
/// let mut routes = Routes::with_base_url("http://myapi.com/api");
/// routes.set("user_detail", "/users/{id}");
///
/// let url = routes.generate("user_detail", &Params::from([("id", 42)]), &Params::new());
/// assert_eq!(url.as_deref(), Some("http://myapi.com/api/users/42"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Routes {
    config: RoutesConfig,
    routes: IndexMap<String, String>,
}

impl Routes {
    /// Creates an empty registry with no base URL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given config.
    pub fn with_config(config: RoutesConfig) -> Self {
        Self {
            config,
            routes: IndexMap::new(),
        }
    }

    /// Creates an empty registry with the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_config(RoutesConfig::new(base_url))
    }

    /// Returns the registry config.
    pub fn config(&self) -> &RoutesConfig {
        &self.config
    }

    /// Registers `template` under `key`, replacing any previous template.
    ///
    /// A replaced key keeps its original position in [`all`](Self::all).
    pub fn set(&mut self, key: impl Into<String>, template: impl Into<String>) {
        let key = key.into();
        let template = template.into();
        debug!(key = %key, template = %template, "registering route");
        if let Some(previous) = self.routes.insert(key, template) {
            debug!(previous = %previous, "replaced existing route");
        }
    }

    /// Registers a set of templates under a shared key and path prefix.
    ///
    /// Each short key becomes `{name}_{short_key}` (or just `short_key` when
    /// the name is empty) and each template is appended to the path prefix
    /// as-is.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_routes::{Prefix, Routes};
    ///
    /// let mut routes = Routes::new();
    /// routes.prefix(Prefix::new().path("/auth/foo").name("auth"), [("foo", "/bar")]);
    /// assert_eq!(routes.url("auth_foo").as_deref(), Some("/auth/foo/bar"));
    /// ```
    pub fn prefix<I, K, V>(&mut self, prefix: Prefix, templates: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut count = 0usize;
        for (short_key, template) in templates {
            self.set(
                prefix.key(short_key.as_ref()),
                prefix.path_for(template.as_ref()),
            );
            count += 1;
        }
        debug!(name = %prefix.name, path = %prefix.path, count, "registered prefixed routes");
    }

    /// Returns every registered route in insertion order.
    pub fn all(&self) -> Vec<RouteEntry> {
        self.routes
            .iter()
            .map(|(key, template)| RouteEntry {
                key: key.clone(),
                template: template.clone(),
            })
            .collect()
    }

    /// Returns the template registered under `key`, without the base URL.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.routes.get(key).map(String::as_str)
    }

    /// Returns whether `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.routes.contains_key(key)
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the base URL joined with the template for `key`, unresolved.
    pub fn url(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|template| format!("{}{template}", self.config.base_url))
    }

    /// Generates the URL for `key`.
    ///
    /// Placeholders are filled from `path_params`. If the template has no
    /// placeholders, `path_params` are sent as query parameters instead,
    /// ahead of `query_params`, in a single query string. The query string
    /// is joined with `&` when the template already carries one.
    ///
    /// Returns `None` for an unregistered key.
    pub fn generate(&self, key: &str, path_params: &Params, query_params: &Params) -> Option<String> {
        let Some(url) = self.url(key) else {
            warn!(key = %key, "no route registered for key");
            return None;
        };
        Some(resolve(url, path_params, query_params))
    }

    /// Like [`generate`](Self::generate), but fails on an unregistered key.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownRoute`] if `key` is not registered.
    pub fn try_generate(
        &self,
        key: &str,
        path_params: &Params,
        query_params: &Params,
    ) -> Result<String> {
        self.generate(key, path_params, query_params)
            .ok_or_else(|| RouteError::UnknownRoute(key.to_string()))
    }

    /// Returns a view of this registry with no way to register routes.
    pub fn lock(&self) -> LockedRoutes<'_> {
        LockedRoutes { routes: self }
    }
}

impl Extend<RouteEntry> for Routes {
    /// Registers each entry with [`Routes::set`], in order.
    fn extend<I: IntoIterator<Item = RouteEntry>>(&mut self, entries: I) {
        for entry in entries {
            self.set(entry.key, entry.template);
        }
    }
}

impl RouteSource for Routes {
    fn generate(&self, key: &str, path_params: &Params, query_params: &Params) -> Option<String> {
        Self::generate(self, key, path_params, query_params)
    }

    fn all(&self) -> Vec<RouteEntry> {
        Self::all(self)
    }
}

/// A read-only view over a [`Routes`] registry.
///
/// Created by [`Routes::lock`]. It borrows the registry, so no routes can be
/// registered while the view is alive.
///
/// The view has no `set` or `prefix`:
///
/// ```compile_fail
/// use oxide_routes::Routes;
///
/// let routes = Routes::new();
/// routes.lock().set("a", "/a");
/// ```
///
/// and the registry cannot be changed while a view is held:
///
/// ```compile_fail
/// use oxide_routes::Routes;
///
/// let mut routes = Routes::new();
/// let locked = routes.lock();
/// routes.set("a", "/a");
/// locked.all();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LockedRoutes<'a> {
    routes: &'a Routes,
}

impl LockedRoutes<'_> {
    /// See [`Routes::generate`].
    pub fn generate(&self, key: &str, path_params: &Params, query_params: &Params) -> Option<String> {
        self.routes.generate(key, path_params, query_params)
    }

    /// See [`Routes::try_generate`].
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownRoute`] if `key` is not registered.
    pub fn try_generate(
        &self,
        key: &str,
        path_params: &Params,
        query_params: &Params,
    ) -> Result<String> {
        self.routes.try_generate(key, path_params, query_params)
    }

    /// See [`Routes::url`].
    pub fn url(&self, key: &str) -> Option<String> {
        self.routes.url(key)
    }

    /// See [`Routes::all`].
    pub fn all(&self) -> Vec<RouteEntry> {
        self.routes.all()
    }
}

impl RouteSource for LockedRoutes<'_> {
    fn generate(&self, key: &str, path_params: &Params, query_params: &Params) -> Option<String> {
        self.routes.generate(key, path_params, query_params)
    }

    fn all(&self) -> Vec<RouteEntry> {
        self.routes.all()
    }
}

fn resolve(mut url: String, path_params: &Params, query_params: &Params) -> String {
    let mut query = Params::new();
    let has_query = url.contains('?');

    if !path_params.is_empty() {
        if template::has_placeholders(&url) {
            url = template::substitute(&url, path_params);
        } else {
            query.merge(path_params);
        }
    }
    query.merge(query_params);

    if !query.is_empty() {
        url.push(if has_query { '&' } else { '?' });
        url.push_str(&query.to_query_string());
    }

    url
}
