//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::constants::PROFESSOR_PASSWORD_HEADER;
use crate::error::HttpAppError;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use catedra_core::{AppError, Config};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Build the full application router. Wrong-method requests on a known path
/// get a 405 from the method router; the mutating routes sit behind the
/// credential middleware so they reject before any body parsing.
pub fn build_router(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let public_routes = Router::new()
        .route("/auth", post(handlers::auth::check_credential))
        .route("/list", get(handlers::list::list_documents))
        .route("/health", get(handlers::health::health_check));

    let protected_routes = Router::new()
        .route("/upload", post(handlers::upload::upload_document))
        .route("/delete", post(handlers::delete::delete_document))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::middleware::require_professor,
        ));

    let app = public_routes
        .merge(protected_routes)
        .route("/openapi.json", get(openapi_json))
        .merge(utoipa_rapidoc::RapiDoc::new("/openapi.json").path("/docs"))
        // A wrong method on a known path must still yield the structured
        // error shape, not axum's bare 405.
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(config.max_upload_size_bytes))
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_seconds,
        )))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn method_not_allowed() -> HttpAppError {
    HttpAppError(AppError::MethodNotAllowed(
        "The HTTP method is not supported on this route".to_string(),
    ))
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([
                header::CONTENT_TYPE,
                HeaderName::from_static(PROFESSOR_PASSWORD_HEADER),
            ])
    };

    Ok(cors)
}
