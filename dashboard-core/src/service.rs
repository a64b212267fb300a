use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::model::WeatherReport;

/// Message shown when the backend gives us nothing better.
pub const FALLBACK_MESSAGE: &str = "An error occurred. Please try again.";

/// What can go wrong while talking to the weather backend.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request never produced a readable response (DNS, connect,
    /// read failures).
    #[error("failed to reach weather service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `message` is the
    /// body's `error` field when present, the fixed fallback otherwise.
    #[error("{message}")]
    Service { message: String },

    /// Success status but the body did not match the expected shape.
    #[error("weather service returned a malformed payload")]
    Malformed(#[source] serde_json::Error),
}

impl ServiceError {
    /// The message the UI shows for this error. Only service-reported
    /// text is passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Service { message } => message.clone(),
            ServiceError::Transport(_) | ServiceError::Malformed(_) => {
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

/// Abstraction over the weather backend. `HttpWeatherService` is the real
/// thing; tests substitute their own implementations.
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    async fn fetch(&self, location: &str) -> Result<WeatherReport, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpWeatherService {
    base_url: String,
    http: Client,
}

impl HttpWeatherService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    fn weather_url(&self, location: &str) -> String {
        // Locations are user input ("New York", "São Paulo"), so the path
        // segment must be percent-encoded.
        format!("{}/api/weather/{}", self.base_url, urlencoding::encode(location))
    }
}

#[async_trait]
impl WeatherService for HttpWeatherService {
    async fn fetch(&self, location: &str) -> Result<WeatherReport, ServiceError> {
        let res = self.http.get(self.weather_url(location)).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, %location, "weather request failed");
            return Err(ServiceError::Service { message: error_message(&body) });
        }

        serde_json::from_str(&body).map_err(ServiceError::Malformed)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extract the human-readable message from a failure body, falling back
/// to the fixed message when the body carries none.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}
