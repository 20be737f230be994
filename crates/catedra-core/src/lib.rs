//! Catedra core library
//!
//! Shared types for the catedra document-publishing backend: configuration,
//! the unified error type, and the document domain model.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
