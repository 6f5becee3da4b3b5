//! Client configuration baked in at build time.
//!
//! Values come from `option_env!` so the WASM bundle needs no runtime
//! lookup:
//! - `CHAT_BASE_PATH`: router base path, default `/`
//! - `CHAT_API_BASE_URL`: REST prefix, default `/api`
//! - `CHAT_LOG_LEVEL`: console log level, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use crate::error::ClientError;

pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path prefix the app is served under; `/` or `/prefix` without a trailing slash.
    pub base_path: String,
    /// Prefix for REST endpoints, without a trailing slash.
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_owned(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if any captured value is invalid.
    pub fn from_build_env() -> Result<Self, ClientError> {
        Self::from_parts(
            option_env!("CHAT_BASE_PATH"),
            option_env!("CHAT_API_BASE_URL"),
            option_env!("CHAT_LOG_LEVEL"),
        )
    }

    /// Build config from raw optional values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if any value is invalid.
    pub fn from_parts(
        base_path: Option<&str>,
        api_base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            base_path: parse_base_path(base_path)?,
            api_base_url: parse_api_base_url(api_base_url)?,
            log_level: parse_log_level(log_level)?,
        })
    }

    /// Prefix an app-absolute path (`/main`) with the base path.
    pub fn href(&self, path: &str) -> String {
        if self.base_path == "/" {
            path.to_owned()
        } else if path == "/" {
            self.base_path.clone()
        } else {
            format!("{}{path}", self.base_path)
        }
    }

    /// Base handed to `<Router>`; empty when served from the root.
    pub fn router_base(&self) -> &str {
        if self.base_path == "/" { "" } else { &self.base_path }
    }

    /// Full URL for a REST endpoint path such as `/users/signin`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn parse_base_path(raw: Option<&str>) -> Result<String, ClientError> {
    let value = raw.map_or(DEFAULT_BASE_PATH, str::trim);
    if !value.starts_with('/') {
        return Err(ClientError::Config(format!(
            "CHAT_BASE_PATH must start with '/', got '{value}'"
        )));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ClientError::Config(format!("CHAT_BASE_PATH contains whitespace: '{value}'")));
    }
    let trimmed = value.trim_end_matches('/');
    Ok(if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() })
}

fn parse_api_base_url(raw: Option<&str>) -> Result<String, ClientError> {
    let value = raw.map_or(DEFAULT_API_BASE_URL, str::trim);
    if value.is_empty() {
        return Err(ClientError::Config("CHAT_API_BASE_URL is empty".to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ClientError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => log::Level::from_str(value)
            .map_err(|_| ClientError::Config(format!("unknown CHAT_LOG_LEVEL: {value}"))),
    }
}
