//! Board configuration.
//!
//! The native client reads its backend location from the environment. The
//! browser build talks to the origin that served the page.

use std::time::Duration;

use crate::error::{ErrorKind, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const BASE_URL_ENV: &str = "ACTIVITY_BOARD_URL";
/// How long a signup result stays visible.
pub const MESSAGE_HIDE_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every endpoint, without a trailing slash. Empty means same origin.
    pub base_url: String,
    pub message_hide_delay: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            message_hide_delay: MESSAGE_HIDE_DELAY,
        }
    }
}

impl BoardConfig {
    /// Config for a page served by the backend itself.
    pub fn same_origin() -> Self {
        Self {
            base_url: String::new(),
            message_hide_delay: MESSAGE_HIDE_DELAY,
        }
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !base_url.is_empty()
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            return Err(ErrorKind::ConfigError(format!(
                "{BASE_URL_ENV} must be an http(s) URL, got {base_url:?}"
            ))
            .into());
        }

        Ok(Self {
            base_url: base_url.to_string(),
            message_hide_delay: MESSAGE_HIDE_DELAY,
        })
    }

    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::with_base_url(&url),
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = BoardConfig::with_base_url("http://localhost:8000/").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.message_hide_delay, Duration::from_secs(5));
    }

    #[test]
    fn rejects_non_http_url() {
        assert!(BoardConfig::with_base_url("ftp://localhost").is_err());
        assert!(BoardConfig::with_base_url("").is_ok());
    }
}
