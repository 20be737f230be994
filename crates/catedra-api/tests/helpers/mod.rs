#![allow(dead_code)]

pub mod fakes;

use axum_test::TestServer;
use catedra_api::auth::CredentialGate;
use catedra_api::setup::routes::build_router;
use catedra_api::state::AppState;
use catedra_core::Config;
use fakes::{MemoryDocumentStore, MemoryStorage};
use std::sync::Arc;

pub const TEST_SECRET: &str = "professor-secret";

/// Test application: a running in-process server plus handles to the fake
/// stores so tests can observe and fault-inject both halves.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<MemoryStorage>,
    pub documents: Arc<MemoryDocumentStore>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        database_url: "postgres://unused".to_string(),
        db_max_connections: 5,
        db_timeout_seconds: 30,
        professor_password: Some(TEST_SECRET.to_string()),
        storage_backend: None,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: None,
        local_storage_base_url: None,
        max_upload_size_bytes: 25 * 1024 * 1024,
        request_timeout_seconds: 60,
    }
}

/// Setup a test application backed by in-memory stores.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with_config(test_config())
}

pub fn setup_test_app_with_config(config: Config) -> TestApp {
    let storage = Arc::new(MemoryStorage::new());
    let documents = Arc::new(MemoryDocumentStore::new());
    let gate = CredentialGate::new(config.professor_password.clone());

    let state = Arc::new(AppState::new(
        gate,
        storage.clone(),
        documents.clone(),
        config.clone(),
    ));
    let router = build_router(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        storage,
        documents,
    }
}

/// Minimal but valid-looking PDF bytes for upload bodies.
pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n"
        .to_vec()
}
