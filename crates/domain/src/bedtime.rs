//! Bedtime — the recommended point in time to go to sleep.

use std::fmt;

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::wake_time::WakeTime;

/// A recommended bedtime, computed by subtracting the model's predicted
/// sleep duration from the wake time.
///
/// This is a transient value owned by the caller of one estimation
/// request; it has no identity and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bedtime(NaiveTime);

impl Bedtime {
    /// Compute `wake − predicted_sleep_seconds` as a time of day,
    /// wrapping across midnight when the bedtime falls on the previous
    /// day. Fractional seconds are rounded to the nearest whole second.
    #[must_use]
    pub fn from_wake(wake: WakeTime, predicted_sleep_seconds: f64) -> Self {
        let seconds = predicted_sleep_seconds.round() as i64;
        let (time, _) = wake
            .time()
            .overflowing_sub_signed(TimeDelta::seconds(seconds));
        Self(time)
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

    /// Short `HH:MM` rendering, seconds omitted.
    #[must_use]
    pub fn format_short(self) -> String {
        format!("{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl fmt::Display for Bedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_short())
    }
}
