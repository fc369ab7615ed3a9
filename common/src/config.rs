//! Client configuration.
//!
//! The dashboard reads its API location once at startup and hands the
//! resulting [`ApiConfig`] to the client. The value is immutable afterwards;
//! tests build their own with a fake base URL.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawApiConfig")]
pub struct ApiConfig {
    base_url: String,
    timeout_ms: u32,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawApiConfig {
    base_url: String,
    timeout_ms: u32,
}

impl Default for RawApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TryFrom<RawApiConfig> for ApiConfig {
    type Error = ApiError;

    fn try_from(raw: RawApiConfig) -> Result<Self, Self::Error> {
        ApiConfig::new(raw.base_url, raw.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Validates and normalizes a configuration. Trailing slashes are removed
    /// from the base URL so that endpoint paths can always start with `/`.
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ApiError::Config("base URL must not be empty".to_string()));
        }
        if timeout_ms == 0 {
            return Err(ApiError::Config("timeout must be positive".to_string()));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            timeout_ms,
        })
    }

    /// Builds a configuration from optional textual overrides, the way the
    /// frontend receives them from its build environment. Missing values fall
    /// back to the defaults.
    pub fn from_overrides(base_url: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ApiError> {
        let timeout_ms = match timeout_ms.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|e| ApiError::Config(format!("timeout `{}`: {}", raw, e)))?,
            None => DEFAULT_TIMEOUT_MS,
        };
        Self::new(base_url.unwrap_or(DEFAULT_BASE_URL), timeout_ms)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiConfig::new("http://results.local:8000//", 5000).unwrap();
        assert_eq!(config.base_url(), "http://results.local:8000");
        assert_eq!(config.url("/subjects/"), "http://results.local:8000/subjects/");
        assert_eq!(config.url("subjects/"), "http://results.local:8000/subjects/");
    }

    #[test]
    fn empty_base_url_and_zero_timeout_are_rejected() {
        assert!(matches!(ApiConfig::new("  ", 100), Err(ApiError::Config(_))));
        assert!(matches!(ApiConfig::new("http://x", 0), Err(ApiError::Config(_))));
    }

    #[test]
    fn overrides_fall_back_to_defaults() {
        let config = ApiConfig::from_overrides(None, None).unwrap();
        assert_eq!(config, ApiConfig::default());

        let config = ApiConfig::from_overrides(Some("http://api"), Some(" 2500 ")).unwrap();
        assert_eq!(config.timeout_ms(), 2500);
        assert!(ApiConfig::from_overrides(None, Some("soon")).is_err());
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let config: ApiConfig = serde_json::from_str(r#"{"base_url": "http://api/"}"#).unwrap();
        assert_eq!(config.base_url(), "http://api");
        assert_eq!(config.timeout_ms(), DEFAULT_TIMEOUT_MS);
        assert!(serde_json::from_str::<ApiConfig>(r#"{"base_url": ""}"#).is_err());
    }
}
