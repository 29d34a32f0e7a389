use crate::{Config, model::{CurrentWeather, ForecastResponse}, provider::openweather::OpenWeatherClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Failure of a single fetch attempt. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to reach {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("Failed to parse {endpoint} JSON: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Whether the request never produced a usable response, as opposed to
    /// a response that could not be decoded.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. } | FetchError::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current_weather(&self, city: &str) -> Result<CurrentWeather, FetchError>;

    async fn fetch_forecast(&self, city: &str) -> Result<ForecastResponse, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    provider_with_key(config, config.api_key())
}

/// Like [`provider_from_config`], with the API key already resolved.
pub fn provider_with_key(
    config: &Config,
    api_key: Option<String>,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = api_key.ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `daycast configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    Ok(Box::new(OpenWeatherClient::with_base_url(&config.base_url, api_key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_works_when_key_is_stored() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }

    #[test]
    fn provider_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_with_key(&cfg, None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No OpenWeather API key configured"));
        assert!(msg.contains("Hint: run `daycast configure`"));
        assert!(msg.contains("OPENWEATHER_API_KEY"));
    }

    #[test]
    fn provider_builds_with_explicit_key() {
        let cfg = Config::default();
        assert!(provider_with_key(&cfg, Some("KEY".into())).is_ok());
    }

    #[test]
    fn status_error_message_is_readable() {
        let err = FetchError::Status {
            endpoint: "OpenWeather forecast",
            status: 401,
            body: "Invalid API key".into(),
        };

        assert_eq!(
            err.to_string(),
            "OpenWeather forecast request failed with status 401: Invalid API key"
        );
        assert!(err.is_transport());
        assert!(!err.is_decode());
    }

    #[test]
    fn decode_error_is_distinct_from_transport() {
        let source = serde_json::from_str::<ForecastResponse>("{").unwrap_err();
        let err = FetchError::Decode { endpoint: "OpenWeather forecast", source };

        assert!(err.is_decode());
        assert!(!err.is_transport());
        assert!(err.to_string().starts_with("Failed to parse OpenWeather forecast JSON"));
    }
}
