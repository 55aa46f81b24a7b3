//! `SQLite` storage implementation.
//!
//! This module provides the `SqliteStore` implementation of the `Store` trait.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use linkzo_core::{
    CompanyOrder, CreatorId, CreatorRegistration, NewCompanyOrder, NewCreatorRegistration,
    OrderId, Stats,
};

use crate::error::{Result, StoreError};
use crate::schema::all_statements;
use crate::Store;

/// Maximum pooled connections for a file-backed database.
const MAX_CONNECTIONS: u32 = 5;

/// SQLite-backed storage implementation.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open or create a database file at the given path and apply the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema cannot be created.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(StoreError::from_sqlx)?;

        tracing::info!(path = %path.as_ref().display(), "Connected to SQLite database");

        Self::with_pool(pool).await
    }

    /// Open a private in-memory database.
    ///
    /// The pool holds a single connection that is never recycled, since every
    /// new in-memory connection would start from an empty database.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub async fn in_memory() -> Result<Self> {
        let options: SqliteConnectOptions =
            "sqlite::memory:".parse().map_err(StoreError::from_sqlx)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StoreError::from_sqlx)?;

        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, creating the tables if they are missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self> {
        for (table, ddl) in all_statements() {
            sqlx::query(ddl)
                .execute(&pool)
                .await
                .map_err(StoreError::from_sqlx)?;
            tracing::debug!(table, "Table ready");
        }

        Ok(Self { pool })
    }

    /// Close every pooled connection. Later operations fail with `StoreError::Closed`.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }

    /// Whether [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

fn company_order_from_row(row: &SqliteRow) -> std::result::Result<CompanyOrder, sqlx::Error> {
    Ok(CompanyOrder {
        id: OrderId::new(row.try_get("id")?),
        company_name: row.try_get("company_name")?,
        email: row.try_get("email")?,
        service_required: row.try_get("service_required")?,
        budget_range: row.try_get("budget_range")?,
        created_at: row.try_get("created_at")?,
    })
}

fn creator_registration_from_row(
    row: &SqliteRow,
) -> std::result::Result<CreatorRegistration, sqlx::Error> {
    Ok(CreatorRegistration {
        id: CreatorId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        instagram: row.try_get("instagram")?,
        youtube: row.try_get("youtube")?,
        tiktok: row.try_get("tiktok")?,
        twitter: row.try_get("twitter")?,
        niche: row.try_get("niche")?,
        audience_size: row.try_get("audience_size")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl Store for SqliteStore {
    // =========================================================================
    // Intake
    // =========================================================================

    async fn insert_company_order(&self, order: &NewCompanyOrder) -> Result<OrderId> {
        let result = sqlx::query(
            "INSERT INTO companies (company_name, email, service_required, budget_range, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&order.company_name)
        .bind(&order.email)
        .bind(&order.service_required)
        .bind(&order.budget_range)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)?;

        Ok(OrderId::new(result.last_insert_rowid()))
    }

    async fn insert_creator_registration(
        &self,
        registration: &NewCreatorRegistration,
    ) -> Result<CreatorId> {
        let result = sqlx::query(
            "INSERT INTO creators
                (name, email, instagram, youtube, tiktok, twitter, niche, audience_size, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&registration.name)
        .bind(&registration.email)
        .bind(&registration.instagram)
        .bind(&registration.youtube)
        .bind(&registration.tiktok)
        .bind(&registration.twitter)
        .bind(&registration.niche)
        .bind(&registration.audience_size)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)?;

        Ok(CreatorId::new(result.last_insert_rowid()))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    // Rows stamped by the column default use `YYYY-MM-DD HH:MM:SS`, rows
    // inserted here use RFC 3339; `julianday` orders both by instant.

    async fn list_company_orders(&self) -> Result<Vec<CompanyOrder>> {
        let rows =
            sqlx::query("SELECT * FROM companies ORDER BY julianday(created_at) DESC, id DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(StoreError::from_sqlx)?;

        rows.iter()
            .map(company_order_from_row)
            .collect::<std::result::Result<_, _>>()
            .map_err(StoreError::from_sqlx)
    }

    async fn list_creator_registrations(&self) -> Result<Vec<CreatorRegistration>> {
        let rows =
            sqlx::query("SELECT * FROM creators ORDER BY julianday(created_at) DESC, id DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(StoreError::from_sqlx)?;

        rows.iter()
            .map(creator_registration_from_row)
            .collect::<std::result::Result<_, _>>()
            .map_err(StoreError::from_sqlx)
    }

    async fn stats(&self) -> Result<Stats> {
        let (total_companies, total_creators): (i64, i64) = sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM companies), (SELECT COUNT(*) FROM creators)",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)?;

        Ok(Stats {
            total_companies,
            total_creators,
        })
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(())
    }
}
