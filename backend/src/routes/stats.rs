//! Calendar and volume statistics routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::StatsService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use heavylight_shared::types::{CalendarQuery, CalendarResponse, VolumeResponse};

/// Create stats routes
pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/calendar", get(get_calendar))
        .route("/volume", get(get_volume))
}

/// GET /api/v1/stats/calendar?weeks=N - Sunday-aligned activity grid with
/// the current streak
async fn get_calendar(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<CalendarQuery>,
) -> ApiResult<Json<CalendarResponse>> {
    let calendar = StatsService::calendar(state.db(), auth.user_id, query.weeks).await?;
    Ok(Json(calendar))
}

/// GET /api/v1/stats/volume - Trailing-7-day completed sets per muscle group
async fn get_volume(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<VolumeResponse>> {
    let volume = StatsService::volume(state.db(), auth.user_id).await?;
    Ok(Json(volume))
}
