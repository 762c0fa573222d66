//! Model artifact — the trained coefficients of the linear model.

use std::path::Path;

use serde::Deserialize;

use crate::error::ModelError;

/// Coefficients of the trained regression, as shipped in a TOML
/// artifact file:
///
/// ```toml
/// intercept = 1800.0
/// wake_weight = 0.02
/// sleep_weight = 3600.0
/// coffee_weight = 240.0
/// ```
///
/// The prediction is
/// `intercept + wake_weight * wake_seconds
///  + sleep_weight * estimated_sleep_hours
///  + coffee_weight * coffee_cups`, in seconds of actual sleep needed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelArtifact {
    pub intercept: f64,
    pub wake_weight: f64,
    pub sleep_weight: f64,
    pub coffee_weight: f64,
}

impl Default for ModelArtifact {
    /// The compiled-in coefficients of the bundled pre-trained model.
    fn default() -> Self {
        Self {
            intercept: 1800.0,
            wake_weight: 0.02,
            sleep_weight: 3600.0,
            coffee_weight: 240.0,
        }
    }
}

impl ModelArtifact {
    /// Load an artifact from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Io`] when the file cannot be read,
    /// [`ModelError::Parse`] when it is not valid TOML, and
    /// [`ModelError::NonFiniteCoefficient`] when any coefficient is
    /// NaN or infinite.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(ModelError::Io)?;
        let artifact: Self = toml::from_str(&content).map_err(ModelError::Parse)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), ModelError> {
        let coefficients = [
            self.intercept,
            self.wake_weight,
            self.sleep_weight,
            self.coffee_weight,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::NonFiniteCoefficient);
        }
        Ok(())
    }
}
