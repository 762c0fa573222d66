//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RestwellError`] via `#[from]`. No `String` variants.

/// Fixed alert title shown on any scoring failure.
pub const SCORING_FAILURE_TITLE: &str = "Error";

/// Fixed alert message shown on any scoring failure.
pub const SCORING_FAILURE_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime.";

/// Base error enum for the restwell workspace.
#[derive(Debug, thiserror::Error)]
pub enum RestwellError {
    /// A domain invariant was violated while constructing an input.
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    /// The scoring model failed to initialize or to produce a prediction.
    #[error("Scoring error")]
    Scoring(#[from] ScoringError),
}

impl RestwellError {
    /// The user-facing `(title, message)` pair for this error.
    ///
    /// Scoring failures always surface the same generic pair; the
    /// underlying cause is for logs only.
    #[must_use]
    pub fn user_alert(&self) -> (&'static str, String) {
        match self {
            Self::Validation(err) => ("Invalid input", err.to_string()),
            Self::Scoring(_) => (SCORING_FAILURE_TITLE, SCORING_FAILURE_MESSAGE.to_string()),
        }
    }
}

/// Violations of domain invariants on the three estimator inputs.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Sleep hours outside the closed range `[4.0, 12.0]`.
    #[error("desired sleep must be between 4 and 12 hours, got {hours}")]
    SleepHoursOutOfRange { hours: f64 },

    /// Coffee cups outside the closed range `[1, 20]`.
    #[error("coffee intake must be between 1 and 20 cups, got {cups}")]
    CoffeeCupsOutOfRange { cups: u8 },

    /// A wake time that is not a valid time of day.
    #[error("wake time must be a valid time of day ({hour:02}:{minute:02} is not)")]
    InvalidWakeTime { hour: u32, minute: u32 },

    /// A wake time string that is not `HH:MM`.
    #[error("wake time must be HH:MM, got {input:?}")]
    UnparseableWakeTime { input: String },
}

/// The single scoring-failure kind.
///
/// Both variants surface the same fixed user-facing alert; they exist
/// only so logs can tell "artifact never loaded" from "evaluation blew
/// up". Callers must not retry either.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// The model artifact is missing, unreadable, or corrupt.
    #[error("the scoring model could not be initialized")]
    Initialization,

    /// The model failed to produce a usable prediction.
    #[error("the scoring model failed to produce a prediction")]
    Prediction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_surface_generic_alert_for_initialization_failure() {
        let err = RestwellError::from(ScoringError::Initialization);
        let (title, message) = err.user_alert();
        assert_eq!(title, "Error");
        assert_eq!(message, SCORING_FAILURE_MESSAGE);
    }

    #[test]
    fn should_surface_generic_alert_for_prediction_failure() {
        let err = RestwellError::from(ScoringError::Prediction);
        assert_eq!(err.user_alert(), RestwellError::from(ScoringError::Initialization).user_alert());
    }

    #[test]
    fn should_surface_specific_message_for_validation_failure() {
        let err = RestwellError::from(ValidationError::SleepHoursOutOfRange { hours: 3.5 });
        let (title, message) = err.user_alert();
        assert_eq!(title, "Invalid input");
        assert!(message.contains("3.5"));
    }
}
