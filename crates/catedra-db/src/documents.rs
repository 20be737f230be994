//! Document record repository
//!
//! The record store is the source of truth for "does this document exist".
//! Orchestrators depend on the `DocumentStore` trait rather than the Postgres
//! type so they can be exercised against in-memory fakes.

use async_trait::async_trait;
use catedra_core::models::{Document, NewDocument};
use catedra_core::AppError;
use sqlx::{PgPool, Postgres};

/// Record store capability object for document metadata.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a record; the store assigns `id` and `created_at` and returns
    /// the full inserted row.
    async fn insert(&self, new: NewDocument) -> Result<Document, AppError>;

    /// Delete a record by id. Returns `false` when no such record existed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// All records, newest first (`id` descending). No pagination.
    async fn list(&self) -> Result<Vec<Document>, AppError>;
}

/// Postgres-backed document store.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    #[tracing::instrument(skip(self, new), fields(db.table = "documents", db.operation = "insert", display_name = %new.display_name))]
    async fn insert(&self, new: NewDocument) -> Result<Document, AppError> {
        let row: Document = sqlx::query_as::<Postgres, Document>(
            r#"
            INSERT INTO documents (display_name, storage_key, public_url)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&new.display_name)
        .bind(&new.storage_key)
        .bind(&new.public_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "delete", db.record_id = %id))]
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "select"))]
    async fn list(&self) -> Result<Vec<Document>, AppError> {
        let rows: Vec<Document> =
            sqlx::query_as::<Postgres, Document>("SELECT * FROM documents ORDER BY id DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }
}
