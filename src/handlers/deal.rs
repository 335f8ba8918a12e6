//! Deal CRUD handlers, mounted under /pipelines.

use crate::error::AppError;
use crate::models::{Deal, DealPatch, NewDeal, PageParams};
use crate::service::DealService;
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
) -> Result<Json<Vec<Deal>>, AppError> {
    Ok(Json(DealService::list(&state.pool, page).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewDeal>,
) -> Result<impl IntoResponse, AppError> {
    let deal = DealService::create(&state.pool, body).await?;
    Ok((StatusCode::CREATED, Json(deal)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Deal>, AppError> {
    let deal = DealService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("deal {}", id)))?;
    Ok(Json(deal))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<DealPatch>,
) -> Result<Json<Deal>, AppError> {
    let deal = DealService::update(&state.pool, id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("deal {}", id)))?;
    Ok(Json(deal))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Deal>, AppError> {
    let deal = DealService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("deal {}", id)))?;
    Ok(Json(deal))
}
