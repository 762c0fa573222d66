//! JSON handler for the initial form state.

use axum::Json;

use restwell_app::form::BedtimeForm;

/// `GET /api/form` — the default per-session form state a UI renders
/// at startup (07:00 wake, 8 hours, 1 cup, no alert).
pub async fn defaults() -> Json<BedtimeForm> {
    Json(BedtimeForm::default())
}
