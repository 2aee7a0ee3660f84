//! Desk configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Optional HTTP timeouts. `None` means the request may wait forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

impl HttpTimeouts {
    #[must_use]
    pub fn request(&self) -> Option<Duration> {
        self.request_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Option<Duration> {
        self.connect_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    pub base_url: String,
    pub timeouts: HttpTimeouts,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeouts: HttpTimeouts::default() }
    }
}

impl DeskConfig {
    /// Build typed desk config from environment variables.
    ///
    /// Optional:
    /// - `ARTICLES_BASE_URL`: default `http://localhost:3000`
    /// - `ARTICLES_REQUEST_TIMEOUT_SECS`: unset means no timeout
    /// - `ARTICLES_CONNECT_TIMEOUT_SECS`: unset means no timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL has no http(s) scheme or a timeout is
    /// not a whole number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(
            std::env::var("ARTICLES_BASE_URL")
                .ok()
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL),
        )?;
        let timeouts = HttpTimeouts {
            request_secs: env_parse_opt_u64("ARTICLES_REQUEST_TIMEOUT_SECS")?,
            connect_secs: env_parse_opt_u64("ARTICLES_CONNECT_TIMEOUT_SECS")?,
        };
        Ok(Self { base_url, timeouts })
    }

    /// Replace the base URL, e.g. from a command-line flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL has no http(s) scheme.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(raw)?;
        Ok(self)
    }
}

/// Trim whitespace and trailing slashes, and require an http(s) scheme.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] for any other scheme.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn env_parse_opt_u64(key: &'static str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
