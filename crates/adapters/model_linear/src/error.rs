//! Linear model adapter error types.

use restwell_domain::error::{RestwellError, ScoringError};

/// Errors specific to the linear model adapter.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The artifact file could not be read.
    #[error("failed to read model artifact")]
    Io(#[source] std::io::Error),

    /// The artifact file is not valid TOML.
    #[error("failed to parse model artifact")]
    Parse(#[source] toml::de::Error),

    /// The artifact carries a coefficient that is not a finite number.
    #[error("model artifact contains a non-finite coefficient")]
    NonFiniteCoefficient,

    /// Evaluation produced a value the estimator cannot use.
    #[error("model evaluation produced a non-finite value")]
    NonFinitePrediction,
}

impl ModelError {
    /// Convert into the single domain-level scoring failure for
    /// propagation across the port boundary. Load-time problems map to
    /// `Initialization`, evaluation problems to `Prediction`.
    #[must_use]
    pub fn into_domain(self) -> RestwellError {
        match self {
            Self::Io(_) | Self::Parse(_) | Self::NonFiniteCoefficient => {
                ScoringError::Initialization.into()
            }
            Self::NonFinitePrediction => ScoringError::Prediction.into(),
        }
    }
}

impl From<ModelError> for RestwellError {
    fn from(err: ModelError) -> Self {
        err.into_domain()
    }
}
