//! Catedra storage library
//!
//! Blob storage abstraction for the document-publishing backend: the
//! `Storage` trait plus S3 and local-filesystem implementations.
//!
//! # Storage key format
//!
//! Keys are derived by the upload orchestrator *before* any I/O happens, so
//! every backend is key-addressed: it stores bytes under the key it is given
//! and derives the public URL from that key deterministically. Keys must not
//! contain `..` or a leading `/`.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use catedra_core::StorageBackend;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
