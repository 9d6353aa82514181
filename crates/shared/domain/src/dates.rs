//! Calendar dates in the `MM/DD/YYYY` text form.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

use crate::constants::DATE_FORMAT;
use crate::error::{DomainError, DomainResult};

/// Parse a `MM/DD/YYYY` date. Single-digit months and days are accepted.
pub fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        DomainError::validation(format!(
            "invalid date '{}': expected MM/DD/YYYY ({})",
            value, e
        ))
    })
}

/// Render a date as `MM/DD/YYYY`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for `#[serde(with = "domain::dates::us_date")]` fields.
pub mod us_date {
    use super::*;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}
