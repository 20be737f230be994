pub mod document;

pub use document::{Document, DocumentResponse, NewDocument};
