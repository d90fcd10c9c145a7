//! Training settings routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::SettingsService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use heavylight_shared::types::{SettingsResponse, UpdateSettingsRequest};

/// Create settings routes
pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/", get(get_settings).patch(update_settings))
}

/// GET /api/v1/settings - Fetch settings, creating defaults on first access
async fn get_settings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SettingsResponse>> {
    let settings = SettingsService::get(state.db(), auth.user_id).await?;
    Ok(Json(settings))
}

/// PATCH /api/v1/settings - Partially update settings
async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateSettingsRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    let settings = SettingsService::update(state.db(), auth.user_id, req).await?;
    Ok(Json(settings))
}
