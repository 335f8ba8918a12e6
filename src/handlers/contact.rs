//! Contact CRUD handlers. Absence from the persistence layer becomes 404 here.

use crate::error::AppError;
use crate::models::{Contact, ContactPatch, NewContact, PageParams};
use crate::service::ContactService;
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
) -> Result<Json<Vec<Contact>>, AppError> {
    Ok(Json(ContactService::list(&state.pool, page).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewContact>,
) -> Result<impl IntoResponse, AppError> {
    let contact = ContactService::create(&state.pool, body).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, AppError> {
    let contact = ContactService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("contact {}", id)))?;
    Ok(Json(contact))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ContactPatch>,
) -> Result<Json<Contact>, AppError> {
    let contact = ContactService::update(&state.pool, id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("contact {}", id)))?;
    Ok(Json(contact))
}

/// Returns the deleted record, or 404 when nothing was deleted.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, AppError> {
    let contact = ContactService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("contact {}", id)))?;
    Ok(Json(contact))
}
