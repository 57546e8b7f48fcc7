//! Core data types for weather readings and search bounds

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Text format used for date/time bounds (sorts lexically)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text format used for date-only bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single weather observation as stored in the `weather_data` table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Time the observation was taken
    pub timestamp: NaiveDateTime,

    /// Relative humidity
    pub humidity: f32,

    /// Air temperature
    pub temperature: f32,
}

impl WeatherReading {
    pub fn new(timestamp: NaiveDateTime, humidity: f32, temperature: f32) -> Self {
        Self {
            timestamp,
            humidity,
            temperature,
        }
    }
}

/// Optional start and end date used to filter readings by timestamp.
///
/// Both bounds are inclusive and expressed as sortable text, e.g.
/// `"2022-04-01"` or `"2022-04-01 23:59:59"`. An empty string is treated
/// the same as an unset bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl SearchBounds {
    /// Bounds that match every reading
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds covering `[start, end]`
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::new().start(start).end(end)
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end_date = Some(end.into());
        self
    }

    /// Start bound from a calendar date (midnight onwards)
    pub fn start_on(self, date: NaiveDate) -> Self {
        self.start(date.format(DATE_FORMAT).to_string())
    }

    /// End bound covering the whole of the given calendar date
    pub fn end_on(self, date: NaiveDate) -> Self {
        self.end(format!("{} 23:59:59", date.format(DATE_FORMAT)))
    }

    pub fn start_at(self, at: NaiveDateTime) -> Self {
        self.start(at.format(DATE_TIME_FORMAT).to_string())
    }

    pub fn end_at(self, at: NaiveDateTime) -> Self {
        self.end(at.format(DATE_TIME_FORMAT).to_string())
    }

    /// Start bound, `None` when unset or empty
    pub fn start_date(&self) -> Option<&str> {
        non_empty(self.start_date.as_deref())
    }

    /// End bound, `None` when unset or empty
    pub fn end_date(&self) -> Option<&str> {
        non_empty(self.end_date.as_deref())
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date().is_none() && self.end_date().is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
