//! Company persistence.

use crate::error::AppError;
use crate::models::{Company, CompanyPatch, NewCompany, PageParams};
use crate::service::validation;
use sqlx::PgPool;

const DEFAULT_LIMIT: i64 = 100;

pub struct CompanyService;

impl CompanyService {
    pub async fn create(pool: &PgPool, new: NewCompany) -> Result<Company, AppError> {
        validation::non_empty("name", &new.name)?;
        Ok(sqlx::query_as::<_, Company>(
            "INSERT INTO companies (name, industry, website) VALUES ($1, $2, $3) \
             RETURNING id, name, industry, website, created_at",
        )
        .bind(&new.name)
        .bind(&new.industry)
        .bind(&new.website)
        .fetch_one(pool)
        .await?)
    }

    pub async fn list(pool: &PgPool, page: PageParams) -> Result<Vec<Company>, AppError> {
        Ok(sqlx::query_as::<_, Company>(
            "SELECT id, name, industry, website, created_at FROM companies \
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit_or(DEFAULT_LIMIT))
        .bind(page.skip())
        .fetch_all(pool)
        .await?)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Company>, AppError> {
        Ok(sqlx::query_as::<_, Company>(
            "SELECT id, name, industry, website, created_at FROM companies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn update(
        pool: &PgPool,
        id: i64,
        patch: CompanyPatch,
    ) -> Result<Option<Company>, AppError> {
        if let Some(name) = patch.name.as_deref() {
            validation::non_empty("name", name)?;
        }
        Ok(sqlx::query_as::<_, Company>(
            "UPDATE companies SET \
                 name = COALESCE($2, name), \
                 industry = COALESCE($3, industry), \
                 website = COALESCE($4, website) \
             WHERE id = $1 \
             RETURNING id, name, industry, website, created_at",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.industry)
        .bind(&patch.website)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<Company>, AppError> {
        Ok(sqlx::query_as::<_, Company>(
            "DELETE FROM companies WHERE id = $1 \
             RETURNING id, name, industry, website, created_at",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }
}
