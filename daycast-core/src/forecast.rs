//! Reduction of the 3-hour forecast list into one entry per day.
//!
//! The representative entry for a day is the one stamped at 12:00. Days
//! without a noon entry do not appear in the output, and entries are never
//! averaged together.

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::model::{CLEAR_SKY_ID, DailySummary, ForecastEntry};

/// Format of `dt_txt` in forecast entries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hour of day whose entry stands in for the whole day.
pub const REPRESENTATIVE_HOUR: u32 = 12;

pub fn reduce_to_daily_summaries(entries: &[ForecastEntry]) -> Vec<DailySummary> {
    entries.iter().filter_map(summarize_entry).collect()
}

fn summarize_entry(entry: &ForecastEntry) -> Option<DailySummary> {
    let timestamp = match NaiveDateTime::parse_from_str(&entry.dt_txt, TIMESTAMP_FORMAT) {
        Ok(ts) => ts,
        Err(err) => {
            debug!(dt_txt = %entry.dt_txt, error = %err, "skipping forecast entry with unparseable timestamp");
            return None;
        }
    };

    if timestamp.hour() != REPRESENTATIVE_HOUR {
        return None;
    }

    let Some(conditions) = entry.weather.first() else {
        debug!(dt_txt = %entry.dt_txt, "skipping forecast entry without weather description");
        return None;
    };

    Some(DailySummary {
        day: timestamp.date(),
        condition_id: conditions.id.unwrap_or(CLEAR_SKY_ID),
        description: conditions.description.clone(),
        average_temp_c: entry.main.temp,
    })
}
