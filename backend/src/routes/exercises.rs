//! Exercise catalog routes
//!
//! The catalog is shared reference data: seeded muscle groups and exercises,
//! optionally extended with new names under an existing group.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::{CatalogRepository, ExerciseRecord};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use heavylight_shared::models::ExerciseKind;
use heavylight_shared::types::{CreateExerciseRequest, ExerciseListQuery, ExerciseResponse};

/// Create exercise routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new().route("/", get(list_exercises).post(create_exercise))
}

/// GET /api/v1/exercises - List the catalog, optionally by muscle group
async fn list_exercises(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ExerciseListQuery>,
) -> ApiResult<Json<Vec<ExerciseResponse>>> {
    let records = match query.muscle_group.as_deref() {
        Some(slug) => CatalogRepository::list_exercises_by_group(state.db(), slug)
            .await
            .map_err(ApiError::Internal)?,
        None => CatalogRepository::list_exercises(state.db())
            .await
            .map_err(ApiError::Internal)?,
    };

    Ok(Json(records.iter().map(to_response).collect()))
}

/// POST /api/v1/exercises - Add an exercise under an existing muscle group
async fn create_exercise(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateExerciseRequest>,
) -> ApiResult<(StatusCode, Json<ExerciseResponse>)> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("Exercise name is required".to_string()));
    }

    let group = CatalogRepository::muscle_group_by_slug(state.db(), &req.muscle_group)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Unknown muscle group: {}", req.muscle_group))
        })?;

    let record = CatalogRepository::get_or_create_exercise(
        state.db(),
        group.id,
        name,
        req.kind.as_str(),
        req.description.as_deref(),
        req.image_url.as_deref(),
    )
    .await
    .map_err(ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(to_response(&record))))
}

fn to_response(record: &ExerciseRecord) -> ExerciseResponse {
    ExerciseResponse {
        id: record.id.to_string(),
        name: record.name.clone(),
        muscle_group: record.muscle_group_slug.clone(),
        muscle_group_name: record.muscle_group_name.clone(),
        kind: record.kind.parse().unwrap_or(ExerciseKind::Isolation),
        description: record.description.clone(),
        image_url: record.image_url.clone(),
    }
}
