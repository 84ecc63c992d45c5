//! Viewer configuration, installed once at library initialization.

use contracts::ViewerError;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::shared::api_client::ApiClient;

const DEFAULT_BASE_URL: &str = "/api";

/// Configuration supplied by the embedding application to `init`.
///
/// Immutable after installation. When no explicit auth token is supplied the
/// api key doubles as the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ViewerError> {
        if self.api_key.trim().is_empty() {
            return Err(ViewerError::MissingApiKey);
        }
        Ok(())
    }

    /// Backend base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => url.trim_end_matches('/'),
            _ => DEFAULT_BASE_URL,
        }
    }

    /// Token sent as the `Authorization: Bearer` header.
    pub fn bearer_token(&self) -> &str {
        match self.auth_token.as_deref() {
            Some(token) if !token.is_empty() => token,
            _ => &self.api_key,
        }
    }
}

static CLIENT: OnceCell<ApiClient> = OnceCell::new();

/// Validate the configuration and install the API client built from it.
pub fn install(config: ViewerConfig) -> Result<(), ViewerError> {
    config.validate()?;
    if CLIENT.set(ApiClient::new(config)).is_err() {
        log::warn!("viewer already initialized; keeping the existing configuration");
    }
    Ok(())
}

/// The API client installed by `init`.
pub fn client() -> Result<&'static ApiClient, ViewerError> {
    CLIENT.get().ok_or(ViewerError::NotConfigured)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str) -> ViewerConfig {
        ViewerConfig {
            api_key: api_key.to_string(),
            base_url: None,
            auth_token: None,
        }
    }

    #[test]
    fn missing_api_key_is_rejected() {
        assert_eq!(config("").validate(), Err(ViewerError::MissingApiKey));
        assert_eq!(config("  ").validate(), Err(ViewerError::MissingApiKey));
        assert!(config("key_1").validate().is_ok());
    }

    #[test]
    fn base_url_defaults_and_trims() {
        assert_eq!(config("k").base_url(), "/api");
        let mut custom = config("k");
        custom.base_url = Some("https://reports.example.com/api/".to_string());
        assert_eq!(custom.base_url(), "https://reports.example.com/api");
    }

    #[test]
    fn api_key_doubles_as_bearer_token() {
        let mut cfg = config("key_1");
        assert_eq!(cfg.bearer_token(), "key_1");
        cfg.auth_token = Some("jwt".to_string());
        assert_eq!(cfg.bearer_token(), "jwt");
    }
}
