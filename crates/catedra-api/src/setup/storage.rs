//! Storage backend setup

use anyhow::{Context, Result};
use catedra_core::Config;
use catedra_storage::{create_storage, Storage};
use std::sync::Arc;

/// Create the configured blob-storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;

    tracing::info!(backend = %storage.backend_type(), "Storage backend initialized");

    Ok(storage)
}
