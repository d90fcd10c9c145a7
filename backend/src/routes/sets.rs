//! Set logging route

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use heavylight_shared::types::{LogSetRequest, LogSetResponse};

/// Create set routes
pub fn set_routes() -> Router<AppState> {
    Router::new().route("/", post(log_set))
}

/// POST /api/v1/sets - Log one set against an open workout
///
/// Weight arrives in the client's unit (default kg) and is stored in
/// kilograms. Re-logging the same (exercise, set number) overwrites. The
/// response carries the session progress and the applicable rest period.
async fn log_set(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogSetRequest>,
) -> ApiResult<(StatusCode, Json<LogSetResponse>)> {
    let response = WorkoutService::log_set(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
