//! OpenAPI documentation

use crate::error::ErrorResponse;
use crate::handlers;
use catedra_core::models::DocumentResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catedra API",
        description = "Document-publishing backend: a professor uploads PDFs, the public lists and downloads them."
    ),
    paths(
        handlers::auth::check_credential,
        handlers::health::health_check,
        handlers::list::list_documents,
        handlers::upload::upload_document,
        handlers::delete::delete_document,
    ),
    components(schemas(
        ErrorResponse,
        DocumentResponse,
        handlers::auth::AuthResponse,
        handlers::health::HealthResponse,
        handlers::upload::UploadResponse,
        handlers::delete::DeleteRequest,
        handlers::delete::DeleteResponse,
    )),
    tags(
        (name = "auth", description = "Professor credential check"),
        (name = "documents", description = "Publish, list, and delete PDF documents"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
