//! Schema DDL applied at startup. Everything is idempotent so boot can run it
//! unconditionally. Contact email uniqueness lives here as a partial unique
//! index; the application-level check is only an optimization on top of it.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT,
        role TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS contacts_email_key
        ON contacts (email) WHERE email IS NOT NULL
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        industry TEXT,
        website TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS leads (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'new',
        source TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS deals (
        id BIGSERIAL PRIMARY KEY,
        deal_name TEXT NOT NULL,
        stage TEXT NOT NULL DEFAULT 'prospecting',
        amount DOUBLE PRECISION NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS activities (
        id BIGSERIAL PRIMARY KEY,
        activity_type TEXT NOT NULL,
        description TEXT,
        contact_id BIGINT REFERENCES contacts(id) ON DELETE SET NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Create all tables and indexes if they do not exist. Order matters only for
/// the activities foreign key, which needs contacts first.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
