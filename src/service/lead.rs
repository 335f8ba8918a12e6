//! Lead persistence. Every successful update stamps `updated_at`, whether or
//! not the patch changed anything.

use crate::error::AppError;
use crate::models::{Lead, LeadPatch, NewLead, PageParams};
use crate::service::validation;
use sqlx::PgPool;

const DEFAULT_LIMIT: i64 = 100;

pub struct LeadService;

impl LeadService {
    pub async fn create(pool: &PgPool, new: NewLead) -> Result<Lead, AppError> {
        validation::non_empty("name", &new.name)?;
        Ok(sqlx::query_as::<_, Lead>(
            "INSERT INTO leads (name, status, source) VALUES ($1, $2, $3) \
             RETURNING id, name, status, source, created_at, updated_at",
        )
        .bind(&new.name)
        .bind(&new.status)
        .bind(&new.source)
        .fetch_one(pool)
        .await?)
    }

    pub async fn list(pool: &PgPool, page: PageParams) -> Result<Vec<Lead>, AppError> {
        Ok(sqlx::query_as::<_, Lead>(
            "SELECT id, name, status, source, created_at, updated_at FROM leads \
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit_or(DEFAULT_LIMIT))
        .bind(page.skip())
        .fetch_all(pool)
        .await?)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Lead>, AppError> {
        Ok(sqlx::query_as::<_, Lead>(
            "SELECT id, name, status, source, created_at, updated_at FROM leads WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn update(pool: &PgPool, id: i64, patch: LeadPatch) -> Result<Option<Lead>, AppError> {
        if let Some(name) = patch.name.as_deref() {
            validation::non_empty("name", name)?;
        }
        Ok(sqlx::query_as::<_, Lead>(
            "UPDATE leads SET \
                 name = COALESCE($2, name), \
                 status = COALESCE($3, status), \
                 source = COALESCE($4, source), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id, name, status, source, created_at, updated_at",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.status)
        .bind(&patch.source)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<Lead>, AppError> {
        Ok(sqlx::query_as::<_, Lead>(
            "DELETE FROM leads WHERE id = $1 \
             RETURNING id, name, status, source, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }
}
