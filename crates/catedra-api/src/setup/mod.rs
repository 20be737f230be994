//! Application setup and initialization
//!
//! All initialization logic lives here instead of main.rs so the pieces can
//! be reused and tested independently.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::auth::CredentialGate;
use crate::state::AppState;
use anyhow::{Context, Result};
use catedra_core::Config;
use catedra_db::{DocumentStore, PgDocumentStore};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration before opening any connection.
    validation::validate_config(&config).context("Configuration validation failed")?;

    crate::telemetry::init_telemetry();

    tracing::info!("Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;
    let storage = storage::setup_storage(&config).await?;

    let documents: Arc<dyn DocumentStore> = Arc::new(PgDocumentStore::new(pool));
    let gate = CredentialGate::new(config.professor_password.clone());

    let state = Arc::new(AppState::new(gate, storage, documents, config.clone()));
    let router = routes::build_router(&config, state.clone())?;

    Ok((state, router))
}
