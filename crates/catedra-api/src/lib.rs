//! Catedra API library
//!
//! HTTP handlers, middleware, and application setup for the
//! document-publishing backend.

// Module declarations
mod api_doc;
pub mod constants;
mod handlers;
mod telemetry;

// Public modules
pub mod auth;
pub mod error;
pub mod services;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use services::delete::DeleteOrchestrator;
pub use services::upload::UploadOrchestrator;
