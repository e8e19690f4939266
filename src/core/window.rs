//! `range(start:, stop:)` bounds for time-series queries.

use crate::core::duration::parse_duration;
use crate::core::timestamp::{dt_to_string, fixed_format, is_fixed_width, parse_date};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{Result, TimekitError};
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryWindow {
    #[serde(with = "fixed_format")]
    pub start: DateTime<Utc>,
    #[serde(with = "fixed_format")]
    pub stop: DateTime<Utc>,
}

impl QueryWindow {
    /// Window covering `lookback` up to `stop`, with `stop` cut to whole seconds.
    pub fn ending_at(stop: DateTime<Utc>, lookback: TimeDelta) -> Result<Self> {
        if lookback < TimeDelta::zero() {
            return Err(TimekitError::InvalidWindow {
                message: format!("lookback must not be negative, got {}", lookback),
            });
        }

        let stop = stop.trunc_subsecs(0);
        let start = stop
            .checked_sub_signed(lookback)
            .filter(|start| is_fixed_width(start) && is_fixed_width(&stop))
            .ok_or_else(|| TimekitError::DurationOutOfRange {
                input: lookback.to_string(),
            })?;

        tracing::debug!(
            "built query window {} .. {}",
            dt_to_string(&start),
            dt_to_string(&stop)
        );

        Ok(Self { start, stop })
    }

    /// Parses a lookback such as `"1w"` and an optional stop timestamp.
    /// Without a stop the window ends now.
    pub fn from_lookback(lookback: &str, stop: Option<&str>) -> Result<Self> {
        Self::from_lookback_with_clock(lookback, stop, &SystemClock)
    }

    pub fn from_lookback_with_clock(
        lookback: &str,
        stop: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Self> {
        let span = parse_duration(lookback)?;
        let stop = match stop {
            Some(text) => parse_date(text)?,
            None => clock.now(),
        };
        Self::ending_at(stop, span)
    }

    pub fn span(&self) -> TimeDelta {
        self.stop - self.start
    }

    pub fn start_string(&self) -> String {
        dt_to_string(&self.start)
    }

    pub fn stop_string(&self) -> String {
        dt_to_string(&self.stop)
    }

    pub fn to_flux_range(&self) -> String {
        format!(
            "range(start: {}, stop: {})",
            self.start_string(),
            self.stop_string()
        )
    }
}
