//! Read-only analytics handlers layered over the same tables.

use crate::error::AppError;
use crate::models::{
    Activity, Company, Contact, Deal, Lead, MonthCount, PageParams, RecentParams, RoleCount,
};
use crate::service::{ActivityService, AnalyticsService, DealService, LeadService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DealFilter {
    pub q: Option<String>,
}

pub async fn deals(
    State(state): State<AppState>,
    Query(filter): Query<DealFilter>,
) -> Result<Json<Vec<Deal>>, AppError> {
    Ok(Json(
        AnalyticsService::deals_matching(&state.pool, filter.q.as_deref()).await?,
    ))
}

pub async fn deal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Deal>, AppError> {
    let deal = DealService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("deal {}", id)))?;
    Ok(Json(deal))
}

pub async fn leads(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<Lead>>, AppError> {
    Ok(Json(LeadService::list(&state.pool, page).await?))
}

pub async fn lead(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Lead>, AppError> {
    let lead = LeadService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("lead {}", id)))?;
    Ok(Json(lead))
}

pub async fn contacts_by_role(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleCount>>, AppError> {
    Ok(Json(AnalyticsService::contacts_by_role(&state.pool).await?))
}

pub async fn recent_contacts(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Vec<Contact>>, AppError> {
    Ok(Json(
        AnalyticsService::recent_contacts(&state.pool, params.limit()).await?,
    ))
}

pub async fn recent_companies(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Vec<Company>>, AppError> {
    Ok(Json(
        AnalyticsService::recent_companies(&state.pool, params.limit()).await?,
    ))
}

pub async fn companies_by_month(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthCount>>, AppError> {
    Ok(Json(
        AnalyticsService::companies_by_month(&state.pool).await?,
    ))
}

pub async fn activities(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<Activity>>, AppError> {
    Ok(Json(ActivityService::list(&state.pool, page).await?))
}

pub async fn recent_activities(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Vec<Activity>>, AppError> {
    Ok(Json(
        AnalyticsService::recent_activities(&state.pool, params.limit()).await?,
    ))
}
