//! Catedra database library
//!
//! The record-store side of the document-publishing backend: the
//! `DocumentStore` trait and its Postgres implementation.

pub mod documents;

pub use documents::{DocumentStore, PgDocumentStore};
