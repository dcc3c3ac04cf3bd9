//! PostgreSQL implementation of visit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;
use crate::utils::db_error::{read_failure, write_failure};

#[derive(Debug, sqlx::FromRow)]
struct VisitRow {
    ip_address: String,
    country: Option<String>,
    region_name: Option<String>,
    city: Option<String>,
    isp: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Visit::new(
            row.ip_address,
            row.country,
            row.region_name,
            row.city,
            row.isp,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for visit records.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn create(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let row = sqlx::query_as::<_, VisitRow>(
            r#"
            INSERT INTO visits (redirect_id, ip_address, country, region_name, city, isp)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING ip_address, country, region_name, city, isp, created_at
            "#,
        )
        .bind(new_visit.redirect_id)
        .bind(&new_visit.ip_address)
        .bind(&new_visit.country)
        .bind(&new_visit.region_name)
        .bind(&new_visit.city)
        .bind(&new_visit.isp)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| write_failure("create_visit", e))?;

        Ok(row.into())
    }

    async fn list_by_redirect(&self, redirect_id: i64) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT ip_address, country, region_name, city, isp, created_at
            FROM visits
            WHERE redirect_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(redirect_id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| read_failure("list_visits", e))?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }
}
