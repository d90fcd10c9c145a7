//! Training-data export routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ExportService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::get,
    Router,
};

/// Create export routes
pub fn export_routes() -> Router<AppState> {
    Router::new().route("/csv", get(export_csv))
}

/// GET /api/v1/export/csv - Completed-workout sets as a CSV attachment
async fn export_csv(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let csv = ExportService::export_sets_csv(state.db(), auth.user_id).await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"heavylight-sets.csv\""),
    );

    Ok((headers, csv))
}
