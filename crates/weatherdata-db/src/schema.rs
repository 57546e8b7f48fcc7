//! Schema of the weather readings table
//!
//! The layer only reads from storage. `WEATHER_DATA_DDL` documents the
//! expected layout and is used to build test databases; it is never run
//! against a caller's database.

use std::fmt;

/// Tables this layer is allowed to query.
///
/// Identifiers are substituted into SQL text, so they come from this
/// allow-list and never from runtime strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    WeatherData,
}

impl Table {
    pub const fn name(self) -> &'static str {
        match self {
            Table::WeatherData => tables::WEATHER_DATA,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub mod tables {
    pub const WEATHER_DATA: &str = "weather_data";
}

/// Column names, in the order they are selected
pub mod columns {
    pub const HUMIDITY: &str = "humidity";
    pub const TEMPERATURE: &str = "temperature";
    pub const TIMESTAMP: &str = "timestamp";
}

pub const WEATHER_DATA_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS weather_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp DATETIME NOT NULL,
    humidity REAL,
    temperature REAL
)
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(Table::WeatherData.name(), "weather_data");
        assert_eq!(Table::WeatherData.to_string(), tables::WEATHER_DATA);
    }

    #[test]
    fn test_ddl_declares_selected_columns() {
        for column in [columns::HUMIDITY, columns::TEMPERATURE, columns::TIMESTAMP] {
            assert!(WEATHER_DATA_DDL.contains(column));
        }
    }
}
