//! Lookback strings such as `15m`, `2h`, `3d` or `1w`.

use crate::domain::model::{DurationUnit, LookbackDuration};
use crate::utils::error::{Result, TimekitError};
use chrono::TimeDelta;
use std::str::FromStr;

/// Splits `text` into its integer magnitude and trailing unit code.
///
/// The magnitude is parsed before the unit is checked, so `"xx"` reports the
/// number and `"5x"` reports the unit.
pub fn parse_lookback(text: &str) -> Result<LookbackDuration> {
    let unit_code = text.chars().last().ok_or_else(|| TimekitError::EmptyDuration {
        input: text.to_string(),
    })?;

    let digits = &text[..text.len() - unit_code.len_utf8()];
    if digits.is_empty() {
        return Err(TimekitError::EmptyDuration {
            input: text.to_string(),
        });
    }

    let magnitude = digits
        .parse::<i64>()
        .map_err(|source| TimekitError::InvalidMagnitude {
            input: text.to_string(),
            source,
        })?;

    let unit = DurationUnit::from_code(unit_code).ok_or_else(|| TimekitError::InvalidUnit {
        input: text.to_string(),
        unit: unit_code,
    })?;

    Ok(LookbackDuration::new(magnitude, unit))
}

/// Parses a lookback string straight into a signed time span.
pub fn parse_duration(text: &str) -> Result<TimeDelta> {
    let lookback = parse_lookback(text).inspect_err(|e| {
        tracing::trace!("rejected duration {:?}: {}", text, e);
    })?;

    lookback
        .to_time_delta()
        .ok_or_else(|| TimekitError::DurationOutOfRange {
            input: text.to_string(),
        })
}

impl FromStr for LookbackDuration {
    type Err = TimekitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_lookback(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_unit() {
        assert_eq!(parse_duration("5m").unwrap(), TimeDelta::minutes(5));
        assert_eq!(parse_duration("2h").unwrap(), TimeDelta::hours(2));
        assert_eq!(parse_duration("3d").unwrap(), TimeDelta::days(3));
        assert_eq!(parse_duration("1w").unwrap(), TimeDelta::days(7));
    }

    #[test]
    fn test_signed_magnitude() {
        assert_eq!(parse_duration("-2h").unwrap(), TimeDelta::hours(-2));
        assert_eq!(parse_duration("+4d").unwrap(), TimeDelta::days(4));
        assert_eq!(parse_duration("0m").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_invalid_unit() {
        let err = parse_duration("5x").unwrap_err();
        assert!(matches!(err, TimekitError::InvalidUnit { unit: 'x', .. }));

        // seconds are not a lookback unit
        assert!(matches!(
            parse_duration("30s"),
            Err(TimekitError::InvalidUnit { unit: 's', .. })
        ));
        // unit codes are case sensitive
        assert!(matches!(
            parse_duration("5M"),
            Err(TimekitError::InvalidUnit { .. })
        ));
    }

    #[test]
    fn test_invalid_magnitude() {
        assert!(matches!(
            parse_duration("xm"),
            Err(TimekitError::InvalidMagnitude { .. })
        ));
        assert!(matches!(
            parse_duration("1.5h"),
            Err(TimekitError::InvalidMagnitude { .. })
        ));
        assert!(matches!(
            parse_duration(" 5m"),
            Err(TimekitError::InvalidMagnitude { .. })
        ));
    }

    #[test]
    fn test_magnitude_checked_before_unit() {
        assert!(matches!(
            parse_duration("xx"),
            Err(TimekitError::InvalidMagnitude { .. })
        ));
        assert!(matches!(
            parse_duration("1.5s"),
            Err(TimekitError::InvalidMagnitude { .. })
        ));
        assert!(matches!(
            parse_duration("5x"),
            Err(TimekitError::InvalidUnit { unit: 'x', .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_duration(""),
            Err(TimekitError::EmptyDuration { .. })
        ));
        assert!(matches!(
            parse_duration("w"),
            Err(TimekitError::EmptyDuration { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        let text = format!("{}w", i64::MAX);
        assert!(matches!(
            parse_duration(&text),
            Err(TimekitError::DurationOutOfRange { .. })
        ));
    }

    #[test]
    fn test_lookback_display_round_trip() {
        let lookback: LookbackDuration = "12h".parse().unwrap();
        assert_eq!(lookback, LookbackDuration::new(12, DurationUnit::Hour));
        assert_eq!(lookback.to_string(), "12h");
        assert_eq!(lookback.to_string().parse::<LookbackDuration>().unwrap(), lookback);
    }
}
