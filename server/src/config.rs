//! Host configuration parsed from environment variables.
//!
//! - `PORT`: listen port, default 3000
//! - `PLANNER_API_URL`: remote trip API handed to the browser, default
//!   `http://localhost:3333`
//!
//! Leptos site settings (`LEPTOS_SITE_ROOT`, ...) are read separately by
//! `leptos::prelude::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub use client::util::config::DEFAULT_API_URL;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("PLANNER_API_URL must be an http(s) URL, got '{0}'")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Trip API base URL without a trailing slash.
    pub api_url: String,
}

impl HostConfig {
    /// Build the host config from `PORT` and `PLANNER_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("PLANNER_API_URL").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, api_url: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let api_url = match api_url.map(str::trim) {
            None | Some("") => DEFAULT_API_URL.to_owned(),
            Some(raw) => parse_api_url(raw)?,
        };
        Ok(Self { port, api_url })
    }
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
