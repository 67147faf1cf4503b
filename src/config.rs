//! Client configuration, resolved once at startup.

use crate::domain::error::ConfigError;
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const BASE_URL_ENV: &str = "TRINITY_API_BASE_URL";
/// Name used by the web build; honoured so one `.env` serves both.
pub const LEGACY_BASE_URL_ENV: &str = "VITE_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "TRINITY_API_TIMEOUT_SECS";

/// Settings for [`crate::infrastructure::api::client::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every request path, without a trailing slash.
    pub base_url: String,
    /// Sent with every request.
    pub default_headers: BTreeMap<String, String>,
    /// No timeout when `None`.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut default_headers = BTreeMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = get(BASE_URL_ENV).or_else(|| get(LEGACY_BASE_URL_ENV)) {
            config = config.with_base_url(&url)?;
        }
        if let Some(raw) = get(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(format!("{TIMEOUT_ENV}={raw}")))?;
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout(format!(
                    "{TIMEOUT_ENV} must be positive"
                )));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        let trimmed = url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }
}
