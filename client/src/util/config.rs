//! Runtime configuration for the browser bundle.
//!
//! The server publishes the remote trip API base URL in a `<meta>` tag of
//! the SSR shell. The hydrated client reads it back; during SSR and tests the
//! default is used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Remote trip API used when no override is published.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// `name` of the `<meta>` tag carrying the API base URL.
pub const API_URL_META: &str = "planner-api-url";

/// Base URL of the remote trip API, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(super::browser::read_meta(API_URL_META).as_deref())
}

fn normalize_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_URL.to_owned(),
    }
}
