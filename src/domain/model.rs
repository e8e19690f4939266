use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit codes accepted as the last character of a lookback string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationUnit {
    Minute,
    Hour,
    Day,
    Week,
}

impl DurationUnit {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'm' => Some(DurationUnit::Minute),
            'h' => Some(DurationUnit::Hour),
            'd' => Some(DurationUnit::Day),
            'w' => Some(DurationUnit::Week),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            DurationUnit::Minute => 'm',
            DurationUnit::Hour => 'h',
            DurationUnit::Day => 'd',
            DurationUnit::Week => 'w',
        }
    }
}

/// A signed count of minutes, hours, days or weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackDuration {
    pub magnitude: i64,
    pub unit: DurationUnit,
}

impl LookbackDuration {
    pub fn new(magnitude: i64, unit: DurationUnit) -> Self {
        Self { magnitude, unit }
    }

    /// `None` when the span does not fit in a `TimeDelta`.
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        match self.unit {
            DurationUnit::Minute => TimeDelta::try_minutes(self.magnitude),
            DurationUnit::Hour => TimeDelta::try_hours(self.magnitude),
            DurationUnit::Day => TimeDelta::try_days(self.magnitude),
            DurationUnit::Week => TimeDelta::try_weeks(self.magnitude),
        }
    }
}

impl fmt::Display for LookbackDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.code())
    }
}
