//! dates in traffic datasets are calendar dates written as yyyy-mm-dd. some
//! exports carry a (meaningless) time-of-day suffix, which is dropped.
use chrono::{NaiveDate, NaiveDateTime};
use serde::{de::Error, Deserialize, Deserializer};

use crate::model::TrafficError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// parses a date, accepting a trailing time component.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, TrafficError> {
    let trimmed = date_str.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| TrafficError::InvalidDateError(date_str.to_string()))
}

pub fn deserialize_naive_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: String = String::deserialize(deserializer)?;
    parse_date(&date_str).map_err(|e| D::Error::custom(format!("Invalid date format: {e}")))
}
