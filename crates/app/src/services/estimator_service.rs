//! Estimator service — the one-shot bedtime estimation use-case.

use restwell_domain::bedtime::Bedtime;
use restwell_domain::coffee::CoffeeIntake;
use restwell_domain::error::{RestwellError, ScoringError};
use restwell_domain::event::EstimateEvent;
use restwell_domain::features::SleepFeatures;
use restwell_domain::sleep::SleepAmount;
use restwell_domain::wake_time::WakeTime;

use crate::ports::{EventPublisher, SleepScorer};

/// Longest prediction the service accepts, in seconds. A sleep
/// duration beyond a full day is a model fault, and it would overflow
/// the time-of-day arithmetic.
const MAX_PREDICTED_SLEEP_SECONDS: f64 = 86_400.0;

/// Application service performing one estimation request at a time.
///
/// Stateless and synchronous in nature: every call builds the feature
/// vector, invokes the scorer once, derives the bedtime, and returns.
/// No retries, no partial results.
pub struct EstimatorService<S, EP> {
    scorer: S,
    events: EP,
}

impl<S: SleepScorer, EP: EventPublisher> EstimatorService<S, EP> {
    /// Create a new service backed by the given scorer and event publisher.
    pub fn new(scorer: S, events: EP) -> Self {
        Self { scorer, events }
    }

    /// Estimate the ideal bedtime for the given inputs.
    ///
    /// The inputs carry their own range invariants, so the service
    /// trusts them and performs no further validation.
    ///
    /// # Errors
    ///
    /// Returns [`RestwellError::Scoring`] when the model fails to
    /// initialize or to produce a usable prediction (finite,
    /// non-negative, and no longer than a full day). The failure is
    /// terminal for this request.
    pub async fn estimate(
        &self,
        wake: WakeTime,
        sleep: SleepAmount,
        coffee: CoffeeIntake,
    ) -> Result<Bedtime, RestwellError> {
        let features = SleepFeatures::new(wake, sleep, coffee);

        let predicted_seconds = match self.scorer.predict_sleep_seconds(features).await {
            // The range check also rejects NaN and infinities.
            Ok(seconds) if (0.0..=MAX_PREDICTED_SLEEP_SECONDS).contains(&seconds) => seconds,
            Ok(seconds) => {
                tracing::error!(predicted = seconds, "scorer produced an unusable prediction");
                self.publish(EstimateEvent::failed(features)).await;
                return Err(ScoringError::Prediction.into());
            }
            Err(err) => {
                tracing::error!(error = %err, "scorer failed");
                self.publish(EstimateEvent::failed(features)).await;
                return Err(err);
            }
        };

        let bedtime = Bedtime::from_wake(wake, predicted_seconds);
        tracing::debug!(
            wake = %wake,
            predicted_seconds,
            bedtime = %bedtime,
            "bedtime estimated"
        );

        self.publish(EstimateEvent::computed(features, bedtime)).await;
        Ok(bedtime)
    }

    /// Publishing is observability only; it must never fail the request.
    async fn publish(&self, event: EstimateEvent) {
        if let Err(err) = self.events.publish(event).await {
            tracing::warn!(error = %err, "failed to publish estimate event");
        }
    }
}
