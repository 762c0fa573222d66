//! Wake time — the time of day the user wants to wake up.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{RestwellError, ValidationError};

/// Time-of-day the user wants to wake up. Only hour and minute matter;
/// any seconds are ignored when the time is turned into a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeTime(NaiveTime);

impl Default for WakeTime {
    /// The application default of 07:00.
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default())
    }
}

impl WakeTime {
    /// Build a wake time from an hour and minute.
    ///
    /// # Errors
    ///
    /// Returns [`RestwellError::Validation`] when `hour` is not in
    /// `[0, 23]` or `minute` is not in `[0, 59]`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, RestwellError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidWakeTime { hour, minute }.into())
    }

    /// Wrap an existing time of day.
    #[must_use]
    pub fn from_time(time: NaiveTime) -> Self {
        Self(time)
    }

    /// The underlying time of day.
    #[must_use]
    pub fn time(self) -> NaiveTime {
        self.0
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// The scalar feature fed to the scoring model:
    /// `hour * 3600 + minute * 60`, seconds dropped.
    #[must_use]
    pub fn seconds_since_midnight(self) -> u32 {
        self.hour() * 3600 + self.minute() * 60
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for WakeTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self)
            .map_err(|_| ValidationError::UnparseableWakeTime {
                input: s.to_string(),
            })
    }
}
