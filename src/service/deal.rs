//! Deal persistence, exposed over HTTP as the /pipelines family.

use crate::error::AppError;
use crate::models::{Deal, DealPatch, NewDeal, PageParams};
use crate::service::validation;
use sqlx::PgPool;

const DEFAULT_LIMIT: i64 = 100;

pub struct DealService;

impl DealService {
    pub async fn create(pool: &PgPool, new: NewDeal) -> Result<Deal, AppError> {
        validation::non_empty("deal_name", &new.deal_name)?;
        Ok(sqlx::query_as::<_, Deal>(
            "INSERT INTO deals (deal_name, stage, amount) VALUES ($1, $2, $3) \
             RETURNING id, deal_name, stage, amount",
        )
        .bind(&new.deal_name)
        .bind(&new.stage)
        .bind(new.amount)
        .fetch_one(pool)
        .await?)
    }

    pub async fn list(pool: &PgPool, page: PageParams) -> Result<Vec<Deal>, AppError> {
        Ok(sqlx::query_as::<_, Deal>(
            "SELECT id, deal_name, stage, amount FROM deals ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit_or(DEFAULT_LIMIT))
        .bind(page.skip())
        .fetch_all(pool)
        .await?)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Deal>, AppError> {
        Ok(sqlx::query_as::<_, Deal>(
            "SELECT id, deal_name, stage, amount FROM deals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn update(pool: &PgPool, id: i64, patch: DealPatch) -> Result<Option<Deal>, AppError> {
        if let Some(deal_name) = patch.deal_name.as_deref() {
            validation::non_empty("deal_name", deal_name)?;
        }
        Ok(sqlx::query_as::<_, Deal>(
            "UPDATE deals SET \
                 deal_name = COALESCE($2, deal_name), \
                 stage = COALESCE($3, stage), \
                 amount = COALESCE($4, amount) \
             WHERE id = $1 \
             RETURNING id, deal_name, stage, amount",
        )
        .bind(id)
        .bind(&patch.deal_name)
        .bind(&patch.stage)
        .bind(patch.amount)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<Deal>, AppError> {
        Ok(sqlx::query_as::<_, Deal>(
            "DELETE FROM deals WHERE id = $1 RETURNING id, deal_name, stage, amount",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }
}
