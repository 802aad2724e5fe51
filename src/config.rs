//! Provider configuration, assembled from CLI arguments and the environment

use std::time::Duration;

/// Current-weather endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Seconds before an unanswered request is treated as a transport failure
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing OpenWeather API key (pass --api-key or set OPENWEATHER_API_KEY)")]
    MissingApiKey,
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("could not build HTTP client: {0}")]
    HttpClient(String),
}

/// Everything the weather client needs to reach the provider
#[derive(Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Validate raw settings. A blank key counts as missing.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        reqwest::Url::parse(&endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            url: endpoint.clone(),
            reason: e.to_string(),
        })?;

        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            endpoint,
            api_key,
            timeout,
        })
    }

    /// Default endpoint and timeout with the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(
            DEFAULT_ENDPOINT,
            Some(api_key.into()),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}
