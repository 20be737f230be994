//! Storage abstraction trait
//!
//! This module defines the Storage trait that all blob storage backends must
//! implement.

use async_trait::async_trait;
use catedra_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait.
/// The upload orchestrator works against this trait so it can be tested with
/// an in-memory fake; no caller couples to a concrete backend.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under the caller-derived `storage_key` with the given
    /// content type. Returns the public URL of the stored object.
    async fn upload(
        &self,
        storage_key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String>;

    /// Delete an object by its storage key. A missing object surfaces as
    /// `StorageError::NotFound` so callers can treat it as already-deleted.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if an object exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Deterministic public URL for a storage key. Pure; performs no I/O.
    fn public_url(&self, storage_key: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
