//! Sleep amount — the desired sleep duration in hours.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RestwellError, ValidationError};

/// Desired sleep duration in hours, always within `[4.0, 12.0]`.
///
/// The UI adjusts the value in quarter-hour steps; [`increment`](Self::increment)
/// and [`decrement`](Self::decrement) reproduce that stepper, saturating
/// at the bounds instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepAmount(f64);

impl SleepAmount {
    /// Lowest selectable amount.
    pub const MIN_HOURS: f64 = 4.0;
    /// Highest selectable amount.
    pub const MAX_HOURS: f64 = 12.0;
    /// Stepper granularity in hours.
    pub const STEP_HOURS: f64 = 0.25;

    /// Build a sleep amount, enforcing the range invariant.
    ///
    /// # Errors
    ///
    /// Returns [`RestwellError::Validation`] when `hours` is outside
    /// `[4.0, 12.0]` or not a finite number.
    pub fn new(hours: f64) -> Result<Self, RestwellError> {
        if !hours.is_finite() || !(Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            return Err(ValidationError::SleepHoursOutOfRange { hours }.into());
        }
        Ok(Self(hours))
    }

    /// The amount in hours.
    #[must_use]
    pub fn hours(self) -> f64 {
        self.0
    }

    /// One stepper tick up, saturating at [`MAX_HOURS`](Self::MAX_HOURS).
    #[must_use]
    pub fn increment(self) -> Self {
        Self((self.0 + Self::STEP_HOURS).min(Self::MAX_HOURS))
    }

    /// One stepper tick down, saturating at [`MIN_HOURS`](Self::MIN_HOURS).
    #[must_use]
    pub fn decrement(self) -> Self {
        Self((self.0 - Self::STEP_HOURS).max(Self::MIN_HOURS))
    }
}

impl Default for SleepAmount {
    /// The application default of 8 hours.
    fn default() -> Self {
        Self(8.0)
    }
}

impl fmt::Display for SleepAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_eight_hours() {
        assert!((SleepAmount::default().hours() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_lower_boundary() {
        assert!(SleepAmount::new(4.0).is_ok());
    }

    #[test]
    fn should_accept_upper_boundary() {
        assert!(SleepAmount::new(12.0).is_ok());
    }

    #[test]
    fn should_reject_just_below_lower_boundary() {
        let result = SleepAmount::new(3.99);
        assert!(matches!(
            result,
            Err(RestwellError::Validation(
                ValidationError::SleepHoursOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn should_reject_just_above_upper_boundary() {
        assert!(SleepAmount::new(12.01).is_err());
    }

    #[test]
    fn should_reject_nan() {
        assert!(SleepAmount::new(f64::NAN).is_err());
    }

    #[test]
    fn should_increment_by_a_quarter_hour() {
        let amount = SleepAmount::default().increment();
        assert!((amount.hours() - 8.25).abs() < f64::EPSILON);
    }

    #[test]
    fn should_saturate_increment_at_twelve_hours() {
        let amount = SleepAmount::new(12.0).unwrap().increment();
        assert!((amount.hours() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_saturate_decrement_at_four_hours() {
        let amount = SleepAmount::new(4.0).unwrap().decrement();
        assert!((amount.hours() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_display_hours_suffix() {
        assert_eq!(SleepAmount::default().to_string(), "8 hours");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let amount = SleepAmount::new(7.75).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        let parsed: SleepAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, amount);
    }
}
