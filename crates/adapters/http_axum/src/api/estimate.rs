//! JSON handler for estimation requests.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use restwell_app::ports::{EventPublisher, SleepScorer};
use restwell_domain::coffee::CoffeeIntake;
use restwell_domain::error::RestwellError;
use restwell_domain::sleep::SleepAmount;
use restwell_domain::wake_time::WakeTime;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for one estimation.
#[derive(Deserialize)]
pub struct EstimateRequest {
    /// Wake time as `HH:MM`.
    pub wake_time: String,
    /// Desired sleep in hours, `[4.0, 12.0]`.
    pub sleep_hours: f64,
    /// Cups of coffee per day, `[1, 20]` (one-based).
    pub coffee_cups: u8,
}

/// Response body for a successful estimation.
#[derive(Serialize)]
pub struct EstimateBody {
    /// Recommended bedtime as `HH:MM`.
    pub bedtime: String,
}

/// Possible responses from the estimate endpoint.
pub enum EstimateResponse {
    Ok(Json<EstimateBody>),
}

impl IntoResponse for EstimateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/estimate`
pub async fn estimate<S, EP>(
    State(state): State<AppState<S, EP>>,
    Json(request): Json<EstimateRequest>,
) -> Result<EstimateResponse, ApiError>
where
    S: SleepScorer + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let wake: WakeTime = request
        .wake_time
        .parse()
        .map_err(|err| ApiError::from(RestwellError::Validation(err)))?;
    let sleep = SleepAmount::new(request.sleep_hours).map_err(ApiError::from)?;
    let coffee = CoffeeIntake::new(request.coffee_cups).map_err(ApiError::from)?;

    let bedtime = state.estimator.estimate(wake, sleep, coffee).await?;

    Ok(EstimateResponse::Ok(Json(EstimateBody {
        bedtime: bedtime.format_short(),
    })))
}
