pub mod delete;
pub mod ingest;
pub mod upload;
