//! Lead CRUD handlers.

use crate::error::AppError;
use crate::models::{Lead, LeadPatch, NewLead, PageParams};
use crate::service::LeadService;
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
) -> Result<Json<Vec<Lead>>, AppError> {
    Ok(Json(LeadService::list(&state.pool, page).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewLead>,
) -> Result<impl IntoResponse, AppError> {
    let lead = LeadService::create(&state.pool, body).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Lead>, AppError> {
    let lead = LeadService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("lead {}", id)))?;
    Ok(Json(lead))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<LeadPatch>,
) -> Result<Json<Lead>, AppError> {
    let lead = LeadService::update(&state.pool, id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("lead {}", id)))?;
    Ok(Json(lead))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Lead>, AppError> {
    let lead = LeadService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("lead {}", id)))?;
    Ok(Json(lead))
}
