use serde::{Deserialize, Serialize};

/// Coarse family of an OpenWeather condition id.
///
/// See <https://openweathermap.org/weather-conditions> for the id table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionGroup {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    Unknown,
}

impl ConditionGroup {
    pub fn from_id(id: u32) -> Self {
        match id {
            200..=232 => ConditionGroup::Thunderstorm,
            300..=321 => ConditionGroup::Drizzle,
            500..=531 => ConditionGroup::Rain,
            600..=622 => ConditionGroup::Snow,
            700..=781 => ConditionGroup::Atmosphere,
            800 => ConditionGroup::Clear,
            801..=804 => ConditionGroup::Clouds,
            _ => ConditionGroup::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConditionGroup::Thunderstorm => "thunderstorm",
            ConditionGroup::Drizzle => "drizzle",
            ConditionGroup::Rain => "rain",
            ConditionGroup::Snow => "snow",
            ConditionGroup::Atmosphere => "fog",
            ConditionGroup::Clear => "sunny",
            ConditionGroup::Clouds => "cloudy",
            ConditionGroup::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ConditionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_boundaries() {
        assert_eq!(ConditionGroup::from_id(200), ConditionGroup::Thunderstorm);
        assert_eq!(ConditionGroup::from_id(232), ConditionGroup::Thunderstorm);
        assert_eq!(ConditionGroup::from_id(300), ConditionGroup::Drizzle);
        assert_eq!(ConditionGroup::from_id(321), ConditionGroup::Drizzle);
        assert_eq!(ConditionGroup::from_id(500), ConditionGroup::Rain);
        assert_eq!(ConditionGroup::from_id(531), ConditionGroup::Rain);
        assert_eq!(ConditionGroup::from_id(600), ConditionGroup::Snow);
        assert_eq!(ConditionGroup::from_id(622), ConditionGroup::Snow);
        assert_eq!(ConditionGroup::from_id(701), ConditionGroup::Atmosphere);
        assert_eq!(ConditionGroup::from_id(781), ConditionGroup::Atmosphere);
    }

    #[test]
    fn clear_and_clouds_are_distinct() {
        assert_eq!(ConditionGroup::from_id(800), ConditionGroup::Clear);
        assert_eq!(ConditionGroup::from_id(801), ConditionGroup::Clouds);
        assert_eq!(ConditionGroup::from_id(804), ConditionGroup::Clouds);
    }

    #[test]
    fn gaps_are_unknown() {
        for id in [0, 199, 233, 400, 532, 623, 805, 999] {
            assert_eq!(ConditionGroup::from_id(id), ConditionGroup::Unknown, "id {id}");
        }
    }
}
