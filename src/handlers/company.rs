//! Company CRUD handlers.

use crate::error::AppError;
use crate::models::{Company, CompanyPatch, NewCompany, PageParams};
use crate::service::CompanyService;
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
) -> Result<Json<Vec<Company>>, AppError> {
    Ok(Json(CompanyService::list(&state.pool, page).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCompany>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::create(&state.pool, body).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Company>, AppError> {
    let company = CompanyService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company {}", id)))?;
    Ok(Json(company))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<CompanyPatch>,
) -> Result<Json<Company>, AppError> {
    let company = CompanyService::update(&state.pool, id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company {}", id)))?;
    Ok(Json(company))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Company>, AppError> {
    let company = CompanyService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company {}", id)))?;
    Ok(Json(company))
}
