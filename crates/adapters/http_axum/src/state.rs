//! Shared application state for axum handlers.

use std::sync::Arc;

use restwell_app::event_bus::InProcessEventBus;
use restwell_app::ports::{EventPublisher, SleepScorer};
use restwell_app::services::estimator_service::EstimatorService;

/// Application state shared across all axum handlers.
///
/// Generic over the scorer and event publisher to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<S, EP> {
    /// The bedtime estimation use-case.
    pub estimator: Arc<EstimatorService<S, EP>>,
    /// Event bus handle for SSE subscriptions.
    pub event_bus: Arc<InProcessEventBus>,
}

impl<S, EP> Clone for AppState<S, EP> {
    fn clone(&self) -> Self {
        Self {
            estimator: Arc::clone(&self.estimator),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<S, EP> AppState<S, EP>
where
    S: SleepScorer + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state from a service instance and the
    /// event bus it publishes to.
    pub fn new(estimator: EstimatorService<S, EP>, event_bus: Arc<InProcessEventBus>) -> Self {
        Self {
            estimator: Arc::new(estimator),
            event_bus,
        }
    }
}
