//! Workout routes
//!
//! Creation is a conditional insert guarded by the active-workout unique
//! index; `?day_type=heavy&active=true` is how a client resumes today's
//! session. The `/missed` endpoints tag and untag calendar days.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use heavylight_shared::types::{
    ClearMissedRequest, ClearMissedResponse, CreateWorkoutRequest, TagMissedRequest,
    UpdateWorkoutRequest, WorkoutListQuery, WorkoutResponse,
};
use uuid::Uuid;

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/missed", post(tag_missed).delete(clear_missed))
        .route(
            "/:id",
            get(get_workout).patch(update_workout).delete(delete_workout),
        )
}

/// GET /api/v1/workouts - List workouts; `?day_type=&active=true` narrows to
/// today's active workout of that type
async fn list_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<WorkoutListQuery>,
) -> ApiResult<Json<Vec<WorkoutResponse>>> {
    let workouts = WorkoutService::list(state.db(), auth.user_id, query).await?;
    Ok(Json(workouts))
}

/// POST /api/v1/workouts - Create a workout; 409 when an active workout for
/// that day type and day already exists
async fn create_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutResponse>)> {
    let workout = WorkoutService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/v1/workouts/{id} - Fetch one workout with sets, owner-scoped
async fn get_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = WorkoutService::get(state.db(), auth.user_id, id).await?;
    Ok(Json(workout))
}

/// PATCH /api/v1/workouts/{id} - Partial update
async fn update_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = WorkoutService::update(state.db(), auth.user_id, id, req).await?;
    Ok(Json(workout))
}

/// DELETE /api/v1/workouts/{id} - Delete a workout and its sets
async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    WorkoutService::delete(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/workouts/missed - Tag a civil day as missed; creates a
/// placeholder workout when the day has none
async fn tag_missed(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<TagMissedRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutResponse>)> {
    let (workout, created) = WorkoutService::tag_missed(state.db(), auth.user_id, req).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(workout)))
}

/// DELETE /api/v1/workouts/missed - Untag a missed day; a set-less,
/// never-completed placeholder is deleted, logged work only loses its tag
async fn clear_missed(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ClearMissedRequest>,
) -> ApiResult<Json<ClearMissedResponse>> {
    let response = WorkoutService::clear_missed(state.db(), auth.user_id, req).await?;
    Ok(Json(response))
}
