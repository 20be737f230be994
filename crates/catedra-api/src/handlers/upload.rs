use crate::error::{ErrorResponse, HttpAppError};
use crate::services::ingest::parse_upload_form;
use crate::services::upload::UploadOrchestrator;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub id: i64,
    pub display_name: String,
}

/// Publish a PDF: parse the multipart body, validate it, then run the
/// two-phase write. Authentication already happened in middleware.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "documents",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Document published", body = UploadResponse),
        (status = 400, description = "Missing input or unsupported media type", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Storage or record failure", body = ErrorResponse)
    )
)]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let form = parse_upload_form(multipart).await?;
    let validated = form.into_validated()?;

    let orchestrator =
        UploadOrchestrator::new(state.storage.clone(), state.documents.clone());
    let document = orchestrator.publish(validated).await?;

    Ok(Json(UploadResponse {
        message: "Document uploaded".to_string(),
        id: document.id,
        display_name: document.display_name,
    }))
}
