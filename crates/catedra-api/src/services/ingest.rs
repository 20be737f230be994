//! Multipart ingest parser
//!
//! Turns a streamed multipart body into exactly one validated file payload
//! plus a flat map of text fields. Purely a demultiplexing/validation stage:
//! it never talks to storage or the record store.

use crate::constants::{ACCEPTED_CONTENT_TYPE, DISPLAY_NAME_FIELD};
use axum::extract::Multipart;
use catedra_core::AppError;
use std::collections::HashMap;

/// The in-flight binary buffer plus its declared MIME type and filename.
/// Scoped to one request; discarded when the request completes or fails.
#[derive(Debug)]
pub struct UploadPayload {
    pub data: Vec<u8>,
    pub content_type: String,
    pub original_filename: String,
}

/// Raw parse result: one optional file part and the text fields seen so far
/// (last value wins for repeated names).
#[derive(Debug, Default)]
pub struct ParsedForm {
    pub file: Option<UploadPayload>,
    pub fields: HashMap<String, String>,
}

/// A parse that passed completion validation: the file buffer exists and the
/// display-name field is present and non-empty.
#[derive(Debug)]
pub struct ValidatedUpload {
    pub display_name: String,
    pub payload: UploadPayload,
}

/// Consume the whole multipart stream. File parts are the ones carrying a
/// filename; everything else is a text field. A file part whose declared MIME
/// type is not `application/pdf` aborts the parse immediately with no buffer
/// retained.
pub async fn parse_upload_form(mut multipart: Multipart) -> Result<ParsedForm, AppError> {
    let mut form = ParsedForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedInput(format!("Failed to read multipart body: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if let Some(filename) = field.file_name().map(|s| s.to_string()) {
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            if normalize_mime_type(&content_type) != ACCEPTED_CONTENT_TYPE {
                return Err(AppError::UnsupportedMediaType(format!(
                    "'{}' is not allowed; only {} is accepted",
                    content_type, ACCEPTED_CONTENT_TYPE
                )));
            }

            if form.file.is_some() {
                return Err(AppError::MalformedInput(
                    "Multiple file parts are not allowed; send exactly one".to_string(),
                ));
            }

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::MalformedInput(format!("Failed to read file data: {}", e)))?;

            form.file = Some(UploadPayload {
                data: data.to_vec(),
                content_type,
                original_filename: filename,
            });
        } else {
            let value = field.text().await.map_err(|e| {
                AppError::MalformedInput(format!("Failed to read field '{}': {}", field_name, e))
            })?;
            form.fields.insert(field_name, value);
        }
    }

    Ok(form)
}

impl ParsedForm {
    /// Completion validation: usable only with a file buffer and a non-empty
    /// `nombre` field. Runs before any I/O downstream.
    pub fn into_validated(mut self) -> Result<ValidatedUpload, AppError> {
        let display_name = self
            .fields
            .remove(DISPLAY_NAME_FIELD)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        match (self.file, display_name) {
            (Some(payload), Some(display_name)) => Ok(ValidatedUpload {
                display_name,
                payload,
            }),
            (None, _) => Err(AppError::MissingInput(
                "PDF file part is required".to_string(),
            )),
            (_, None) => Err(AppError::MissingInput(format!(
                "Field '{}' is required and must be non-empty",
                DISPLAY_NAME_FIELD
            ))),
        }
    }
}

/// Normalize MIME type by stripping parameters
/// (e.g. "application/pdf; charset=binary" -> "application/pdf").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}
