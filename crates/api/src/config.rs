use std::env;

use url::Url;

/// Default backend origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend origin. A deployment behind a
/// reverse proxy points this at its `/api` origin.
pub const BASE_URL_ENV: &str = "SCOUT_API_URL";

/// Connection settings for the backend API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Builds a config from an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(base_url.trim())?;
        Ok(Self { base_url })
    }

    /// Builds a config from `SCOUT_API_URL`, falling back to the local
    /// development default.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the configured value is not an absolute URL.
    pub fn from_env() -> Result<Self, url::ParseError> {
        let raw = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(&raw)
    }

    /// The backend origin without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
