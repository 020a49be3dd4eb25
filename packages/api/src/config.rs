//! API endpoint configuration.
//!
//! The base URL comes from `VITE_API_URL`. Browser builds have no process
//! environment, so the value is baked in at compile time; native builds also
//! consult the runtime environment (after loading `.env`), which takes priority.

use crate::error::ApiError;

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "VITE_API_URL";

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/";

/// Where the travel API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Always ends with `/`.
    pub base_url: String,
}

impl ApiConfig {
    /// Validate and normalise a base URL. A missing trailing slash is appended.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut base_url = base_url.into().trim().to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "{API_URL_VAR} must be an http(s) URL, got {base_url:?}"
            )));
        }
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { base_url })
    }

    /// Resolve the base URL from the environment, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Some(url) = std::env::var(API_URL_VAR).ok().filter(|u| !u.trim().is_empty()) {
                return Self::new(url);
            }
        }

        match option_env!("VITE_API_URL").filter(|u| !u.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_URL),
        }
    }

    /// Join a relative endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_appended() {
        let config = ApiConfig::new("https://api.example.com/v1").unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v1/");

        let config = ApiConfig::new(" https://api.example.com/v1/ ").unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v1/");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(matches!(
            ApiConfig::new("ftp://example.com/"),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(ApiConfig::new(""), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_endpoint_join() {
        let config = ApiConfig::new("http://localhost:8000/api/").unwrap();
        assert_eq!(config.endpoint("travel/"), "http://localhost:8000/api/travel/");
        assert_eq!(
            config.endpoint("/auth/login"),
            "http://localhost:8000/api/auth/login"
        );
    }

    #[test]
    fn test_default_is_normalised() {
        let config = ApiConfig::default();
        assert_eq!(config, ApiConfig::new(DEFAULT_API_URL).unwrap());
    }
}
