//! Fixed-width UTC timestamps as used in time-series range queries.

use crate::utils::error::{Result, TimekitError};
use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use regex::Regex;
use std::sync::LazyLock;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const TIMESTAMP_LEN: usize = 20;

static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$")
        .expect("timestamp pattern compiles")
});

/// True when `dt` falls in years 0000..=9999, the only years `%Y` renders
/// with exactly four digits.
pub fn is_fixed_width(dt: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&dt.year())
}

/// Formats `dt` as `YYYY-MM-DDTHH:MM:SSZ`, dropping any fractional seconds.
pub fn dt_to_string(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses text that matches `YYYY-MM-DDTHH:MM:SSZ` exactly.
pub fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    let malformed = |reason: String| TimekitError::MalformedTimestamp {
        input: text.to_string(),
        reason,
    };

    if text.len() != TIMESTAMP_LEN {
        return Err(malformed(format!(
            "expected {} characters, got {}",
            TIMESTAMP_LEN,
            text.len()
        )));
    }

    // chrono alone tolerates unpadded fields and signed years
    if !TIMESTAMP_SHAPE.is_match(text) {
        return Err(malformed("expected YYYY-MM-DDTHH:MM:SSZ".to_string()));
    }

    let naive = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|e| malformed(e.to_string()))?;

    // chrono reads second 60 as a leap second carried in the nanosecond field
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(malformed("second must be in 0..=59".to_string()));
    }

    Ok(naive.and_utc())
}

/// Serde adapter that keeps `DateTime<Utc>` fields in the fixed text form.
pub mod fixed_format {
    use super::{dt_to_string, is_fixed_width, parse_date};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !is_fixed_width(dt) {
            return Err(serde::ser::Error::custom(format!(
                "{} does not fit YYYY-MM-DDTHH:MM:SSZ",
                dt
            )));
        }
        serializer.serialize_str(&dt_to_string(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_date(&text).map_err(serde::de::Error::custom)
    }
}
