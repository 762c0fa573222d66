//! # restwell-adapter-model-linear
//!
//! The concrete scoring function: a linear regression over the three
//! sleep features, standing in for the bundled pre-trained model. The
//! coefficients are opaque to the rest of the system — swapping in a
//! different model format only means providing another [`SleepScorer`]
//! implementation.
//!
//! ## Dependency rule
//!
//! Depends on `restwell-app` (port traits) and `restwell-domain` only.

mod artifact;
pub mod error;

use std::future::Future;
use std::path::Path;

use restwell_app::ports::SleepScorer;
use restwell_domain::error::RestwellError;
use restwell_domain::features::SleepFeatures;

pub use artifact::ModelArtifact;
pub use error::ModelError;

/// Linear sleep model: `intercept + w · features`, in seconds.
#[derive(Debug, Clone)]
pub struct LinearSleepModel {
    artifact: ModelArtifact,
}

impl Default for LinearSleepModel {
    /// Model backed by the compiled-in coefficients.
    fn default() -> Self {
        Self {
            artifact: ModelArtifact::default(),
        }
    }
}

impl LinearSleepModel {
    /// Build a model from an already-loaded artifact.
    #[must_use]
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self { artifact }
    }

    /// Load the model from a TOML artifact file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the file is missing, malformed, or
    /// carries non-finite coefficients.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        Ok(Self {
            artifact: ModelArtifact::load(path)?,
        })
    }

    fn evaluate(&self, features: SleepFeatures) -> Result<f64, ModelError> {
        let prediction = self.artifact.intercept
            + self.artifact.wake_weight * features.wake_seconds
            + self.artifact.sleep_weight * features.estimated_sleep_hours
            + self.artifact.coffee_weight * features.coffee_cups;

        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(ModelError::NonFinitePrediction)
        }
    }
}

impl SleepScorer for LinearSleepModel {
    fn predict_sleep_seconds(
        &self,
        features: SleepFeatures,
    ) -> impl Future<Output = Result<f64, RestwellError>> + Send {
        let result = self.evaluate(features).map_err(ModelError::into_domain);
        async move { result }
    }
}
