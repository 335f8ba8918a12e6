//! Activity persistence.

use crate::error::AppError;
use crate::models::{Activity, ActivityPatch, NewActivity, PageParams};
use crate::service::validation;
use sqlx::PgPool;

const DEFAULT_LIMIT: i64 = 100;

pub struct ActivityService;

impl ActivityService {
    pub async fn create(pool: &PgPool, new: NewActivity) -> Result<Activity, AppError> {
        validation::non_empty("activity_type", &new.activity_type)?;
        let inserted = sqlx::query_as::<_, Activity>(
            "INSERT INTO activities (activity_type, description, contact_id) VALUES ($1, $2, $3) \
             RETURNING id, activity_type, description, contact_id, created_at",
        )
        .bind(&new.activity_type)
        .bind(&new.description)
        .bind(new.contact_id)
        .fetch_one(pool)
        .await;
        match inserted {
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => Err(
                AppError::BadRequest(format!("unknown contact: {:?}", new.contact_id)),
            ),
            other => Ok(other?),
        }
    }

    pub async fn list(pool: &PgPool, page: PageParams) -> Result<Vec<Activity>, AppError> {
        Ok(sqlx::query_as::<_, Activity>(
            "SELECT id, activity_type, description, contact_id, created_at FROM activities \
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit_or(DEFAULT_LIMIT))
        .bind(page.skip())
        .fetch_all(pool)
        .await?)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Activity>, AppError> {
        Ok(sqlx::query_as::<_, Activity>(
            "SELECT id, activity_type, description, contact_id, created_at \
             FROM activities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn update(
        pool: &PgPool,
        id: i64,
        patch: ActivityPatch,
    ) -> Result<Option<Activity>, AppError> {
        if let Some(activity_type) = patch.activity_type.as_deref() {
            validation::non_empty("activity_type", activity_type)?;
        }
        let updated = sqlx::query_as::<_, Activity>(
            "UPDATE activities SET \
                 activity_type = COALESCE($2, activity_type), \
                 description = COALESCE($3, description), \
                 contact_id = COALESCE($4, contact_id) \
             WHERE id = $1 \
             RETURNING id, activity_type, description, contact_id, created_at",
        )
        .bind(id)
        .bind(&patch.activity_type)
        .bind(&patch.description)
        .bind(patch.contact_id)
        .fetch_optional(pool)
        .await;
        match updated {
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => Err(
                AppError::BadRequest(format!("unknown contact: {:?}", patch.contact_id)),
            ),
            other => Ok(other?),
        }
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<Activity>, AppError> {
        Ok(sqlx::query_as::<_, Activity>(
            "DELETE FROM activities WHERE id = $1 \
             RETURNING id, activity_type, description, contact_id, created_at",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }
}
