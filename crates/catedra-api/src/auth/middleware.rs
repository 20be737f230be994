use crate::constants::PROFESSOR_PASSWORD_HEADER;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use catedra_core::AppError;
use std::sync::Arc;

/// Rejects unauthenticated mutating requests before any other work happens,
/// including body parsing. Read-only routes are not wired through this.
pub async fn require_professor(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(PROFESSOR_PASSWORD_HEADER)
        .and_then(|h| h.to_str().ok());

    if !state.gate.authenticate(presented) {
        return HttpAppError(AppError::Unauthorized("Access denied".to_string()))
            .into_response();
    }

    next.run(request).await
}
