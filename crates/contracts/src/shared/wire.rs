//! Lenient decoders for values the backend serializes inconsistently.
//!
//! Decimal columns may arrive as JSON numbers or as numeric strings, and
//! dates may arrive as `YYYY-MM-DD`, RFC 3339 or RFC 2822 (`Fri, 15 Mar 2024
//! 00:00:00 GMT`) depending on the serializer in front of the database.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// `deserialize_with` helper for decimal fields
pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid decimal {raw:?}: {e}"))),
    }
}

/// `deserialize_with` helper for date fields
pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("unrecognised date {raw:?}")))
}

/// Parse any of the date shapes the backend is known to emit
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
