use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Condition id OpenWeather uses for a clear sky.
pub const CLEAR_SKY_ID: u32 = 800;

/// Placeholder id for current weather reported without any conditions.
pub const UNKNOWN_CONDITION_ID: u32 = 0;

/// Latest observed weather for the configured city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Resolved location name, when the API reports one.
    pub location_name: Option<String>,
    pub temperature_c: f64,
    pub condition_id: u32,
    pub description: String,
}

impl CurrentWeather {
    /// Temperature as shown to the user: truncated toward zero.
    pub fn display_temperature(&self) -> i64 {
        self.temperature_c.trunc() as i64
    }
}

/// One element of the `weather` array attached to every OpenWeather reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    #[serde(default)]
    pub id: Option<u32>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

/// A single 3-hour entry of the forecast endpoint, as returned on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Wall-clock timestamp, `yyyy-MM-dd HH:mm:ss`.
    pub dt_txt: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Conditions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastCity {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: Option<ForecastCity>,
}

/// One representative forecast per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub day: NaiveDate,
    pub condition_id: u32,
    pub description: String,
    pub average_temp_c: f64,
}

impl DailySummary {
    pub fn display_temperature(&self) -> i64 {
        self.average_temp_c.trunc() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_temperature_truncates_toward_zero() {
        let mut current = CurrentWeather {
            location_name: None,
            temperature_c: 25.9,
            condition_id: CLEAR_SKY_ID,
            description: "clear sky".into(),
        };
        assert_eq!(current.display_temperature(), 25);

        current.temperature_c = -3.7;
        assert_eq!(current.display_temperature(), -3);
    }

    #[test]
    fn forecast_entry_tolerates_missing_weather_and_id() {
        let json = r#"{
            "dt_txt": "2024-08-03 12:00:00",
            "main": { "temp": 21.5, "humidity": 40 }
        }"#;
        let entry: ForecastEntry = serde_json::from_str(json).expect("entry should decode");
        assert!(entry.weather.is_empty());

        let json = r#"{ "description": "haze" }"#;
        let cond: Conditions = serde_json::from_str(json).expect("conditions should decode");
        assert_eq!(cond.id, None);
    }
}
