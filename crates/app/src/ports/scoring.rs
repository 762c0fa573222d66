//! Scoring port — the opaque pre-trained regression model.

use std::future::Future;

use restwell_domain::error::RestwellError;
use restwell_domain::features::SleepFeatures;

/// Scores a feature vector into a predicted sleep duration in seconds.
///
/// Implementations are deterministic, side-effect-free functions of the
/// three features; the coefficients behind them are opaque and
/// replaceable. The call is async only to match the port idiom — no
/// implementation is expected to suspend.
pub trait SleepScorer {
    /// Predict the actual sleep duration needed, in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`RestwellError::Scoring`] when the model failed to
    /// initialize or to evaluate. Callers must not retry.
    fn predict_sleep_seconds(
        &self,
        features: SleepFeatures,
    ) -> impl Future<Output = Result<f64, RestwellError>> + Send;
}

impl<T: SleepScorer + Send + Sync> SleepScorer for std::sync::Arc<T> {
    fn predict_sleep_seconds(
        &self,
        features: SleepFeatures,
    ) -> impl Future<Output = Result<f64, RestwellError>> + Send {
        (**self).predict_sleep_seconds(features)
    }
}
