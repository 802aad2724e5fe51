//! OpenWeather current-weather client

use reqwest::StatusCode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{ConfigError, ProviderConfig};
use crate::icons::icon_for_code;
use crate::state::WeatherSnapshot;

/// Why a lookup produced no snapshot
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum FetchError {
    /// Provider answered with its "404" sentinel
    #[error("City not found: {0}")]
    NotFound(String),
    /// Network failure, timeout, or a provider error other than not-found
    #[error("Weather request failed: {0}")]
    Request(String),
    /// Body was not the expected JSON shape
    #[error("Could not read weather response: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    name: String,
    coord: Coord,
    main: MainReadings,
    wind: Wind,
    sys: Sys,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct Coord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Sys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct Condition {
    icon: String,
}

/// `cod` arrives as a number on success and as a string on errors
fn provider_code(value: &Value) -> Option<u64> {
    match value.get("cod")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Map a provider body onto a snapshot.
///
/// `query` is only used to label a not-found error.
pub fn parse_response(body: &str, query: &str) -> Result<WeatherSnapshot, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    match provider_code(&value) {
        Some(404) => return Err(FetchError::NotFound(query.to_string())),
        Some(code) if code >= 400 => {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("no message");
            return Err(FetchError::Request(format!(
                "provider returned code {code}: {message}"
            )));
        }
        _ => {}
    }

    let parsed: CurrentWeatherResponse =
        serde_json::from_value(value).map_err(|e| FetchError::Parse(e.to_string()))?;

    let condition_code = parsed
        .weather
        .into_iter()
        .next()
        .map(|c| c.icon)
        .ok_or_else(|| FetchError::Parse("response has no weather conditions".into()))?;

    Ok(WeatherSnapshot {
        temperature: parsed.main.temp,
        city: parsed.name,
        country: parsed.sys.country,
        latitude: parsed.coord.lat,
        longitude: parsed.coord.lon,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        icon: icon_for_code(&condition_code),
        condition_code,
    })
}

fn interpret_response(
    status: StatusCode,
    body: &str,
    query: &str,
) -> Result<WeatherSnapshot, FetchError> {
    match parse_response(body, query) {
        Err(FetchError::Parse(_)) if !status.is_success() => Err(FetchError::Request(format!(
            "provider returned status {status}"
        ))),
        other => other,
    }
}

// ============================================================================
// Client
// ============================================================================

/// Issues current-weather lookups against the configured provider
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl WeatherClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn request_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&appid={}&units=Metric",
            self.config.endpoint,
            urlencoding::encode(query),
            urlencoding::encode(&self.config.api_key)
        )
    }

    /// Look up current weather for a city name
    pub async fn search(&self, query: &str) -> Result<WeatherSnapshot, FetchError> {
        tracing::info!(
            city = query,
            endpoint = %self.config.endpoint,
            "requesting current weather"
        );

        // Errors drop the URL: it carries the API key.
        let response = self
            .http
            .get(self.request_url(query))
            .send()
            .await
            .map_err(|e| FetchError::Request(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.without_url().to_string()))?;

        interpret_response(status, &body, query)
    }
}
