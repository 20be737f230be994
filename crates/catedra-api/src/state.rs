//! Application state
//!
//! Both stores are injected as capability objects so the orchestrators can be
//! tested against in-memory fakes; nothing reaches into globals.

use crate::auth::CredentialGate;
use catedra_core::Config;
use catedra_db::DocumentStore;
use catedra_storage::Storage;
use std::sync::Arc;

/// Main application state, shared by all handlers via `Arc<AppState>`.
pub struct AppState {
    pub gate: CredentialGate,
    pub storage: Arc<dyn Storage>,
    pub documents: Arc<dyn DocumentStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        gate: CredentialGate,
        storage: Arc<dyn Storage>,
        documents: Arc<dyn DocumentStore>,
        config: Config,
    ) -> Self {
        Self {
            gate,
            storage,
            documents,
            config,
        }
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
