use crate::constants::PROFESSOR_PASSWORD_HEADER;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, http::HeaderMap, Json};
use catedra_core::AppError;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub message: String,
}

/// Credential check endpoint. A missing header is a malformed request (400),
/// a wrong credential is an authorization failure (401).
#[utoipa::path(
    post,
    path = "/auth",
    tag = "auth",
    params(
        ("X-Professor-Password" = String, Header, description = "Shared professor secret")
    ),
    responses(
        (status = 200, description = "Credential accepted", body = AuthResponse),
        (status = 400, description = "Header missing", body = ErrorResponse),
        (status = 401, description = "Bad credential", body = ErrorResponse)
    )
)]
pub async fn check_credential(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<AuthResponse>, HttpAppError> {
    let presented = headers
        .get(PROFESSOR_PASSWORD_HEADER)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Missing {} header",
                PROFESSOR_PASSWORD_HEADER
            ))
        })?
        .to_str()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} header", PROFESSOR_PASSWORD_HEADER)))?;

    if !state.gate.authenticate(Some(presented)) {
        return Err(AppError::Unauthorized("Access denied".to_string()).into());
    }

    Ok(Json(AuthResponse {
        message: "Authenticated".to_string(),
    }))
}
