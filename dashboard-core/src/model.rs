use serde::{Deserialize, Serialize};

/// Current conditions for a location, as delivered by the backend.
///
/// Every field is required; a payload missing any of them fails to
/// deserialize and is treated as malformed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub description: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// km/h.
    pub wind_speed: f64,
    /// hPa.
    pub pressure: f64,
}

/// One entry of the multi-day forecast. The backend delivers points in
/// chronological order and we keep that order as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub day: String,
    /// Degrees Celsius.
    pub temp: f64,
}

/// Success envelope of `GET /api/weather/<location>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub weather: WeatherSnapshot,
    pub forecast: Vec<ForecastPoint>,
}
