//! Latest fetched weather for one city.
//!
//! The current-weather and forecast fetches run concurrently and each one
//! owns a disjoint part of the board. A failed fetch leaves its part as it
//! was; a successful one overwrites it, whatever the completion order.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    forecast::reduce_to_daily_summaries,
    model::{CurrentWeather, DailySummary},
    provider::{FetchError, WeatherProvider},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherBoard {
    pub city: String,
    pub current: Option<CurrentWeather>,
    pub daily: Vec<DailySummary>,
}

/// Outcome of one [`WeatherBoard::refresh`].
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub current_error: Option<FetchError>,
    pub forecast_error: Option<FetchError>,
}

impl RefreshReport {
    pub fn is_success(&self) -> bool {
        self.current_error.is_none() && self.forecast_error.is_none()
    }

    pub fn all_failed(&self) -> bool {
        self.current_error.is_some() && self.forecast_error.is_some()
    }
}

impl WeatherBoard {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Self::default()
        }
    }

    /// Fetch current weather and forecast once each and apply the results.
    pub async fn refresh(&mut self, provider: &dyn WeatherProvider) -> RefreshReport {
        let city = self.city.as_str();
        let (current, forecast) = tokio::join!(
            provider.fetch_current_weather(city),
            provider.fetch_forecast(city),
        );

        let mut report = RefreshReport::default();

        match current {
            Ok(current) => self.current = Some(current),
            Err(err) => {
                error!(city = %self.city, error = %err, "Failed to fetch current weather data");
                report.current_error = Some(err);
            }
        }

        match forecast {
            Ok(forecast) => {
                self.daily = reduce_to_daily_summaries(&forecast.list);
                info!(
                    city = %self.city,
                    entries = forecast.list.len(),
                    days = self.daily.len(),
                    "forecast refreshed"
                );
            }
            Err(err) => {
                error!(city = %self.city, error = %err, "Failed to fetch forecast weather data");
                report.forecast_error = Some(err);
            }
        }

        report
    }
}
