//! Deletion orchestrator
//!
//! Removes the blob first, then the catalog record. Blob problems are
//! tolerated (the record still comes out of the catalog); a record delete
//! failure is fatal because a listed document with a dead link is worse than
//! an orphaned blob.

use catedra_core::AppError;
use catedra_db::DocumentStore;
use catedra_storage::{Storage, StorageError};
use std::sync::Arc;

pub struct DeleteOrchestrator {
    storage: Arc<dyn Storage>,
    documents: Arc<dyn DocumentStore>,
}

impl DeleteOrchestrator {
    pub fn new(storage: Arc<dyn Storage>, documents: Arc<dyn DocumentStore>) -> Self {
        Self { storage, documents }
    }

    /// Remove a published document. Converges to "document gone" even when
    /// the blob is already missing or the record was already removed.
    pub async fn remove(&self, id: i64, storage_key: &str) -> Result<(), AppError> {
        match self.storage.delete(storage_key).await {
            Ok(()) => {}
            Err(StorageError::NotFound(_)) => {
                tracing::info!(id = id, key = %storage_key, "Blob already absent");
            }
            Err(e) => {
                // Keep going: the record must come out of the catalog even if
                // the blob store is misbehaving.
                tracing::warn!(
                    id = id,
                    key = %storage_key,
                    error = %e,
                    "Blob delete failed; removing the record anyway"
                );
            }
        }

        let removed = self
            .documents
            .delete(id)
            .await
            .map_err(|e| AppError::RecordDelete(e.to_string()))?;

        if !removed {
            tracing::info!(id = id, "Record already absent");
        } else {
            tracing::info!(id = id, key = %storage_key, "Document deleted");
        }

        Ok(())
    }
}
