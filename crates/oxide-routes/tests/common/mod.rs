#![allow(dead_code)]

use oxide_routes::{Params, RouteSource, Routes};
use serde_json::Value;

pub fn params(value: &Value) -> Params {
    Params::from_json(value).unwrap_or_else(|| panic!("Expected a JSON object, got {value}"))
}

pub fn generate(routes: &impl RouteSource, key: &str, path: &Value) -> String {
    generate_with_query(routes, key, path, &Value::Object(Default::default()))
}

pub fn generate_with_query(
    routes: &impl RouteSource,
    key: &str,
    path: &Value,
    query: &Value,
) -> String {
    routes
        .generate(key, &params(path), &params(query))
        .unwrap_or_else(|| panic!("Expected route {key} to be registered"))
}

/// Registry with the routes used across the generation tests.
pub fn fixture() -> Routes {
    let mut routes = Routes::new();
    routes.set("foo", "/api/foo/bar");
    routes.set("foo_bar", "/bar/{id}");
    routes.set("foo_bar_baz", "/bar/{id}/{name}/foo");
    routes.set("foo_to_append", "/api/foo/append");
    routes
}
