//! Activity CRUD handlers.

use crate::error::AppError;
use crate::models::{Activity, ActivityPatch, NewActivity, PageParams};
use crate::service::ActivityService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<Activity>>, AppError> {
    Ok(Json(ActivityService::list(&state.pool, page).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewActivity>,
) -> Result<impl IntoResponse, AppError> {
    let activity = ActivityService::create(&state.pool, body).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Activity>, AppError> {
    let activity = ActivityService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("activity {}", id)))?;
    Ok(Json(activity))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ActivityPatch>,
) -> Result<Json<Activity>, AppError> {
    let activity = ActivityService::update(&state.pool, id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("activity {}", id)))?;
    Ok(Json(activity))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Activity>, AppError> {
    let activity = ActivityService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("activity {}", id)))?;
    Ok(Json(activity))
}
