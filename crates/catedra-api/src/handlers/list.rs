use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, Json};
use catedra_core::models::DocumentResponse;
use std::sync::Arc;

/// Public listing, newest first. No credential required.
#[utoipa::path(
    get,
    path = "/list",
    tag = "documents",
    responses(
        (status = 200, description = "All published documents, newest first", body = Vec<DocumentResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DocumentResponse>>, HttpAppError> {
    let documents = state.documents.list().await.map_err(HttpAppError::from)?;

    Ok(Json(
        documents.into_iter().map(DocumentResponse::from).collect(),
    ))
}
