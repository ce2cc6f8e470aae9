//! Placeholder extraction and substitution.
//!
//! A placeholder is a `{name}` token where `name` is one or more ASCII word
//! characters or dots. Whitespace just inside the braces is tolerated, so
//! `{ id }` names the `id` parameter. Anything else, including unbalanced
//! braces, is plain text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::params::Params;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*([A-Za-z0-9_.]+)\s*\}").expect("Invalid placeholder regex")
});

/// Returns the placeholder names in `template`, in order of appearance.
///
/// Repeated names are kept.
///
/// # Example
///
/// ```
/// use oxide_routes::template::placeholders;
///
/// assert_eq!(placeholders("/foo/{id}/{foo}"), vec!["id", "foo"]);
/// assert!(placeholders("/foo/bar").is_empty());
/// ```
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Returns whether `template` contains at least one placeholder.
pub fn has_placeholders(template: &str) -> bool {
    PLACEHOLDER.is_match(template)
}

/// Replaces every placeholder in `url` that has a value in `params`.
///
/// All occurrences of a name are replaced. Placeholders with no matching
/// parameter are left as they are, and parameters with no matching
/// placeholder are ignored.
///
/// # Example
///
/// ```
/// use oxide_routes::{template::substitute, Params};
///
/// let params = Params::from([("id", "1"), ("foo", "bar")]);
/// assert_eq!(substitute("/foo/{id}/{foo}", &params), "/foo/1/bar");
/// ```
pub fn substitute(url: &str, params: &Params) -> String {
    PLACEHOLDER
        .replace_all(url, |caps: &Captures<'_>| {
            params
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}
