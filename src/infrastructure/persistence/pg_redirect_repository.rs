//! PostgreSQL implementation of redirect repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRedirect, Redirect};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;
use crate::utils::access_code::generate_access_code;
use crate::utils::db_error::{read_failure, write_failure};

/// Row shape shared by every redirect query.
#[derive(Debug, sqlx::FromRow)]
struct RedirectRow {
    id: i64,
    link: String,
    url: String,
    access_code: String,
    created_at: DateTime<Utc>,
}

impl From<RedirectRow> for Redirect {
    fn from(row: RedirectRow) -> Self {
        Redirect::new(row.id, row.link, row.url, row.access_code, row.created_at)
    }
}

/// PostgreSQL repository for redirects.
///
/// Access codes are generated here, at insert time.
pub struct PgRedirectRepository {
    pool: Arc<PgPool>,
}

impl PgRedirectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectRepository for PgRedirectRepository {
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError> {
        let row = sqlx::query_as::<_, RedirectRow>(
            r#"
            INSERT INTO redirects (link, url, access_code)
            VALUES ($1, $2, $3)
            RETURNING id, link, url, access_code, created_at
            "#,
        )
        .bind(&new_redirect.link)
        .bind(&new_redirect.url)
        .bind(generate_access_code())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| write_failure("create_redirect", e))?;

        Ok(row.into())
    }

    async fn find_by_link(&self, link: &str) -> Result<Option<Redirect>, AppError> {
        let row = sqlx::query_as::<_, RedirectRow>(
            r#"
            SELECT id, link, url, access_code, created_at
            FROM redirects
            WHERE link = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(link)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| read_failure("find_redirect_by_link", e))?;

        Ok(row.map(Redirect::from))
    }

    async fn find_by_access_code(&self, access_code: &str) -> Result<Option<Redirect>, AppError> {
        let row = sqlx::query_as::<_, RedirectRow>(
            r#"
            SELECT id, link, url, access_code, created_at
            FROM redirects
            WHERE access_code = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(access_code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| read_failure("find_redirect_by_access_code", e))?;

        Ok(row.map(Redirect::from))
    }

    async fn soft_delete_by_access_code(&self, access_code: &str) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE redirects
            SET deleted_at = NOW()
            WHERE access_code = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(access_code)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| write_failure("delete_redirect", e))?;

        Ok(result.rows_affected())
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM redirects WHERE deleted_at IS NULL")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| read_failure("count_redirects", e))
    }
}
