//! # oxide-routes
//!
//! A named-route registry that turns route keys into URLs.
//!
//! This crate provides:
//! - Named URL templates with `{name}` placeholders
//! - Placeholder substitution from path parameters
//! - Query string generation for parameters with no placeholder
//! - Bulk registration under a shared key and path prefix
//! - A base URL prepended to every generated URL
//! - A locked, read-only view of a registry
//!
//! It only generates URLs. Matching incoming requests is left to the host
//! application's router.
//!
//! ## Quick Start
//!
//! ```
//! use oxide_routes::{create, Params, RoutesConfig};
//!
//! let mut routes = create(RoutesConfig::new("http://myapi.com/api"));
//! routes.set("post_detail", "/posts/{id}");
//!
//! let url = routes.generate("post_detail", &Params::from([("id", 134)]), &Params::new());
//! assert_eq!(url.as_deref(), Some("http://myapi.com/api/posts/134"));
//! ```
//!
//! ## Query Parameters
//!
//! Query parameters are appended after substitution:
//!
//! ```
//! use oxide_routes::{Params, Routes};
//!
//! let mut routes = Routes::new();
//! routes.set("foo_bar", "/bar/{id}");
//!
//! let url = routes.generate(
//!     "foo_bar",
//!     &Params::from([("id", "1")]),
//!     &Params::from([("name", "drew")]),
//! );
//! assert_eq!(url.as_deref(), Some("/bar/1?name=drew"));
//! ```
//!
//! When a template has no placeholders, path parameters become query
//! parameters:
//!
//! ```
//! use oxide_routes::{Params, Routes};
//!
//! let mut routes = Routes::new();
//! routes.set("append", "/api/foo/append");
//!
//! let url = routes.generate("append", &Params::from([("id", 1)]), &Params::new());
//! assert_eq!(url.as_deref(), Some("/api/foo/append?id=1"));
//! ```
//!
//! ## Prefixes
//!
//! ```
//! use oxide_routes::{Prefix, Routes};
//!
//! let mut routes = Routes::new();
//! routes.prefix(
//!     Prefix::new().path("/auth").name("auth"),
//!     [("login", "/login"), ("logout", "/logout")],
//! );
//! assert_eq!(routes.get("auth_login"), Some("/auth/login"));
//! ```
//!
//! ## Locking
//!
//! ```
//! use oxide_routes::{Params, Routes};
//!
//! let mut routes = Routes::new();
//! routes.set("home", "/");
//!
//! let locked = routes.lock();
//! assert_eq!(locked.generate("home", &Params::new(), &Params::new()).as_deref(), Some("/"));
//! assert_eq!(locked.all().len(), 1);
//! ```

mod config;
mod error;
mod params;
mod registry;
pub mod template;

pub use config::RoutesConfig;
pub use error::{Result, RouteError};
pub use params::{json_to_param, Params};
pub use registry::{LockedRoutes, Prefix, RouteEntry, RouteSource, Routes};

/// Creates an empty registry with the given config.
pub fn create(config: RoutesConfig) -> Routes {
    Routes::with_config(config)
}
