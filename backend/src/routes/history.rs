//! Workout history route

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::HistoryService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use heavylight_shared::types::HistoryResponse;

/// Create history routes
pub fn history_routes() -> Router<AppState> {
    Router::new().route("/", get(get_history))
}

/// GET /api/v1/history - Completed workouts grouped into Sunday-start weeks,
/// with set counts and volume in the user's display unit
async fn get_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<HistoryResponse>> {
    let history = HistoryService::history(state.db(), auth.user_id).await?;
    Ok(Json(history))
}
