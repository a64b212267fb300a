//! Core library for the weather dashboard client.
//!
//! This crate defines:
//! - Configuration handling (backend URL, startup location)
//! - The weather backend contract and its HTTP implementation
//! - The query controller and fetch-state machine
//! - Derived presentation data (description → icon mapping)
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod icon;
pub mod model;
pub mod query;
pub mod service;
pub mod state;

pub use config::{Config, DEFAULT_LOCATION};
pub use icon::{WeatherIcon, icon_for};
pub use model::{ForecastPoint, WeatherReport, WeatherSnapshot};
pub use query::QueryController;
pub use service::{FALLBACK_MESSAGE, HttpWeatherService, ServiceError, WeatherService};
pub use state::{FetchState, QueryState, RequestTag, refresh};
