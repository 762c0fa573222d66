//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use restwell_domain::error::RestwellError;

/// JSON error body returned by API endpoints: the title/message pair
/// the presentation layer shows in its alert surface.
#[derive(Serialize)]
struct ErrorBody {
    title: String,
    message: String,
}

/// Maps [`RestwellError`] to an HTTP response with appropriate status code.
pub struct ApiError(RestwellError);

impl From<RestwellError> for ApiError {
    fn from(err: RestwellError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RestwellError::Validation(_) => StatusCode::BAD_REQUEST,
            RestwellError::Scoring(err) => {
                tracing::error!(error = %err, "scoring failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let (title, message) = self.0.user_alert();

        (
            status,
            Json(ErrorBody {
                title: title.to_string(),
                message,
            }),
        )
            .into_response()
    }
}
