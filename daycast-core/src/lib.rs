//! Core library for the `daycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client behind the `WeatherProvider` abstraction
//! - Reduction of the 3-hour forecast into one summary per day
//! - Shared domain models (current weather, daily summaries)
//!
//! It is used by `daycast-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod state;

pub use condition::ConditionGroup;
pub use config::Config;
pub use forecast::reduce_to_daily_summaries;
pub use model::{CurrentWeather, DailySummary, ForecastEntry, ForecastResponse};
pub use provider::{FetchError, WeatherProvider, openweather::OpenWeatherClient, provider_from_config, provider_with_key};
pub use state::{RefreshReport, WeatherBoard};
