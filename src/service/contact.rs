//! Contact persistence. Email uniqueness is enforced by a partial unique
//! index; the pre-checks here only exist to report Conflict without spending
//! an insert attempt.

use crate::error::AppError;
use crate::models::{Contact, ContactPatch, NewContact, PageParams};
use crate::service::validation;
use sqlx::PgPool;

const DEFAULT_LIMIT: i64 = 10;

pub struct ContactService;

impl ContactService {
    pub async fn create(pool: &PgPool, new: NewContact) -> Result<Contact, AppError> {
        validation::non_empty("name", &new.name)?;
        if let Some(email) = new.email.as_deref() {
            validation::email(email)?;
            if Self::email_taken(pool, email, None).await? {
                return Err(AppError::Conflict("email already exists".into()));
            }
        }
        let inserted = sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (name, email, role) VALUES ($1, $2, $3) \
             RETURNING id, name, email, role, created_at",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.role)
        .fetch_one(pool)
        .await;
        match inserted {
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::Conflict("email already exists".into()))
            }
            other => Ok(other?),
        }
    }

    /// Insertion-ordered window over all contacts.
    pub async fn list(pool: &PgPool, page: PageParams) -> Result<Vec<Contact>, AppError> {
        Ok(sqlx::query_as::<_, Contact>(
            "SELECT id, name, email, role, created_at FROM contacts \
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit_or(DEFAULT_LIMIT))
        .bind(page.skip())
        .fetch_all(pool)
        .await?)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Contact>, AppError> {
        Ok(sqlx::query_as::<_, Contact>(
            "SELECT id, name, email, role, created_at FROM contacts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }

    /// Apply only the supplied fields. Returns None when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        patch: ContactPatch,
    ) -> Result<Option<Contact>, AppError> {
        if let Some(name) = patch.name.as_deref() {
            validation::non_empty("name", name)?;
        }
        if let Some(email) = patch.email.as_deref() {
            validation::email(email)?;
            if Self::email_taken(pool, email, Some(id)).await? {
                return Err(AppError::Conflict("email already exists".into()));
            }
        }
        let updated = sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET \
                 name = COALESCE($2, name), \
                 email = COALESCE($3, email), \
                 role = COALESCE($4, role) \
             WHERE id = $1 \
             RETURNING id, name, email, role, created_at",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.email)
        .bind(&patch.role)
        .fetch_optional(pool)
        .await;
        match updated {
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::Conflict("email already exists".into()))
            }
            other => Ok(other?),
        }
    }

    /// Remove and return the row, or None when absent.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<Contact>, AppError> {
        Ok(sqlx::query_as::<_, Contact>(
            "DELETE FROM contacts WHERE id = $1 \
             RETURNING id, name, email, role, created_at",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }

    /// True when a contact other than `exclude` already holds `email`.
    async fn email_taken(
        pool: &PgPool,
        email: &str,
        exclude: Option<i64>,
    ) -> Result<bool, AppError> {
        let taken: bool = match exclude {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM contacts WHERE email = $1 AND id <> $2)",
                )
                .bind(email)
                .bind(id)
                .fetch_one(pool)
                .await?
            }
            None => {
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM contacts WHERE email = $1)")
                    .bind(email)
                    .fetch_one(pool)
                    .await?
            }
        };
        Ok(taken)
    }
}
