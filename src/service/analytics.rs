//! Read-only aggregations over the entity tables.

use crate::error::AppError;
use crate::models::{Activity, Company, Contact, Deal, MonthCount, RoleCount};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct AnalyticsService;

impl AnalyticsService {
    /// Deals whose name contains `q`, case-insensitively. No filter when `q`
    /// is absent or empty.
    pub async fn deals_matching(pool: &PgPool, q: Option<&str>) -> Result<Vec<Deal>, AppError> {
        let rows = match q {
            Some(q) if !q.is_empty() => {
                sqlx::query_as::<_, Deal>(
                    "SELECT id, deal_name, stage, amount FROM deals \
                     WHERE deal_name ILIKE $1 ORDER BY id",
                )
                .bind(format!("%{}%", q))
                .fetch_all(pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Deal>(
                    "SELECT id, deal_name, stage, amount FROM deals ORDER BY id",
                )
                .fetch_all(pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Contact counts grouped by role. A NULL role reports as "Unknown".
    pub async fn contacts_by_role(pool: &PgPool) -> Result<Vec<RoleCount>, AppError> {
        Ok(sqlx::query_as::<_, RoleCount>(
            "SELECT COALESCE(role, 'Unknown') AS role, COUNT(id) AS count \
             FROM contacts GROUP BY role",
        )
        .fetch_all(pool)
        .await?)
    }

    /// Company counts bucketed by creation month, oldest first.
    pub async fn companies_by_month(pool: &PgPool) -> Result<Vec<MonthCount>, AppError> {
        let rows: Vec<(DateTime<Utc>, i64)> = sqlx::query_as(
            "SELECT date_trunc('month', created_at) AS month, COUNT(id) AS count \
             FROM companies GROUP BY 1 ORDER BY 1",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(month, count)| MonthCount {
                month: month_label(month),
                count,
            })
            .collect())
    }

    pub async fn recent_contacts(pool: &PgPool, limit: i64) -> Result<Vec<Contact>, AppError> {
        Ok(sqlx::query_as::<_, Contact>(
            "SELECT id, name, email, role, created_at FROM contacts \
             ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?)
    }

    pub async fn recent_companies(pool: &PgPool, limit: i64) -> Result<Vec<Company>, AppError> {
        Ok(sqlx::query_as::<_, Company>(
            "SELECT id, name, industry, website, created_at FROM companies \
             ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?)
    }

    pub async fn recent_activities(pool: &PgPool, limit: i64) -> Result<Vec<Activity>, AppError> {
        Ok(sqlx::query_as::<_, Activity>(
            "SELECT id, activity_type, description, contact_id, created_at FROM activities \
             ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?)
    }
}

/// First day of the month as `YYYY-MM-DD`, matching the truncated timestamp.
fn month_label(month: DateTime<Utc>) -> String {
    month.date_naive().to_string()
}
