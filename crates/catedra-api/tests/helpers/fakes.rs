#![allow(dead_code)]

//! In-memory fakes for the two external stores, with fault injection.

use async_trait::async_trait;
use catedra_core::models::{Document, NewDocument};
use catedra_core::{AppError, StorageBackend};
use catedra_db::DocumentStore;
use catedra_storage::{Storage, StorageError, StorageResult};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

/// Blob store fake: a key -> bytes map behind a mutex.
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    fail_uploads: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            blobs: Mutex::new(HashMap::new()),
            fail_uploads: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
        }
    }

    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn contains(&self, storage_key: &str) -> bool {
        self.blobs.lock().unwrap().contains_key(storage_key)
    }

    pub fn blob_count(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }

    pub fn keys(&self) -> Vec<String> {
        self.blobs.lock().unwrap().keys().cloned().collect()
    }

    pub fn blob(&self, storage_key: &str) -> Option<Vec<u8>> {
        self.blobs.lock().unwrap().get(storage_key).cloned()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn upload(
        &self,
        storage_key: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::UploadFailed(
                "simulated upload failure".to_string(),
            ));
        }
        self.blobs
            .lock()
            .unwrap()
            .insert(storage_key.to_string(), data);
        Ok(self.public_url(storage_key))
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::DeleteFailed(
                "simulated delete failure".to_string(),
            ));
        }
        match self.blobs.lock().unwrap().remove(storage_key) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(storage_key.to_string())),
        }
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        Ok(self.contains(storage_key))
    }

    fn public_url(&self, storage_key: &str) -> String {
        format!("http://fake.local/{}", storage_key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

/// Record store fake: an ordered vec of documents with a monotonic id.
pub struct MemoryDocumentStore {
    rows: Mutex<Vec<Document>>,
    next_id: AtomicI64,
    fail_inserts: AtomicBool,
    fail_deletes: AtomicBool,
    fail_lists: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_inserts: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            fail_lists: AtomicBool::new(false),
        }
    }

    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn row(&self, id: i64) -> Option<Document> {
        self.rows.lock().unwrap().iter().find(|d| d.id == id).cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, new: NewDocument) -> Result<Document, AppError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::Internal("simulated insert failure".to_string()));
        }
        let document = Document {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            display_name: new.display_name,
            storage_key: new.storage_key,
            public_url: new.public_url,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(document.clone());
        Ok(document)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(AppError::Internal("simulated delete failure".to_string()));
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| d.id != id);
        Ok(rows.len() < before)
    }

    async fn list(&self) -> Result<Vec<Document>, AppError> {
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(AppError::Query("simulated list failure".to_string()));
        }
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }
}
