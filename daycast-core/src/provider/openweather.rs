use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    config::DEFAULT_BASE_URL,
    model::{Conditions, CurrentWeather, ForecastResponse, MainReadings, UNKNOWN_CONDITION_ID},
};

use super::{FetchError, WeatherProvider};

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl AsRef<str>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        city: &str,
        endpoint: &'static str,
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, city, "requesting {endpoint}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("appid", self.api_key.as_str()),
                ("q", city),
                ("units", UNITS),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source: source.without_url() })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source: source.without_url() })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: Option<String>,
    main: MainReadings,
    #[serde(default)]
    weather: Vec<Conditions>,
}

impl From<OwCurrentResponse> for CurrentWeather {
    fn from(parsed: OwCurrentResponse) -> Self {
        let first = parsed.weather.into_iter().next();

        CurrentWeather {
            location_name: parsed.name.filter(|name| !name.is_empty()),
            temperature_c: parsed.main.temp,
            condition_id: first.as_ref().and_then(|w| w.id).unwrap_or(UNKNOWN_CONDITION_ID),
            description: first.map(|w| w.description).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current_weather(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        let parsed: OwCurrentResponse = self
            .get_json(CURRENT_PATH, city, "OpenWeather current weather")
            .await?;

        Ok(parsed.into())
    }

    async fn fetch_forecast(&self, city: &str) -> Result<ForecastResponse, FetchError> {
        let parsed: ForecastResponse = self
            .get_json(FORECAST_PATH, city, "OpenWeather forecast")
            .await?;

        debug!(entries = parsed.list.len(), "decoded forecast");
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
