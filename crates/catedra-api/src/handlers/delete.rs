use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::delete::DeleteOrchestrator;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub id: i64,
    pub storage_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

/// Remove a published document (blob first, then record). Authentication
/// already happened in middleware.
#[utoipa::path(
    post,
    path = "/delete",
    tag = "documents",
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Document removed", body = DeleteResponse),
        (status = 400, description = "Missing or invalid parameters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Record delete failure", body = ErrorResponse)
    )
)]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<DeleteRequest>,
) -> Result<Json<DeleteResponse>, HttpAppError> {
    let orchestrator =
        DeleteOrchestrator::new(state.storage.clone(), state.documents.clone());
    orchestrator
        .remove(request.id, &request.storage_key)
        .await?;

    Ok(Json(DeleteResponse {
        message: "Document deleted".to_string(),
    }))
}
