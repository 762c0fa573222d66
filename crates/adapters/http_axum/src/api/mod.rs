//! JSON API route assembly.

pub mod estimate;
pub mod form;
pub mod sse;

use axum::Router;
use axum::routing::{get, post};

use restwell_app::ports::{EventPublisher, SleepScorer};

use crate::state::AppState;

/// Routes nested under `/api`.
pub fn routes<S, EP>() -> Router<AppState<S, EP>>
where
    S: SleepScorer + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/estimate", post(estimate::estimate::<S, EP>))
        .route("/form", get(form::defaults))
        .route("/estimates/stream", get(sse::stream::<S, EP>))
}
