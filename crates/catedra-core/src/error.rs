//! Error types module
//!
//! All failures are unified under the `AppError` enum: authentication,
//! request validation, and upstream (blob storage / record store) errors.
//!
//! The `Database` variant and `From<sqlx::Error>` are gated behind the `sqlx`
//! feature so non-database crates can depend on this one without pulling in
//! the driver.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for rejected credentials and tolerated upstream issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "record_insert_failed")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("Record insert failed: {0}")]
    RecordInsert(String),

    #[error("Record delete failed: {0}")]
    RecordDelete(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Server misconfiguration: {0}")]
    Misconfiguration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            #[cfg(feature = "sqlx")]
            AppError::Database(_) => 500,
            AppError::Unauthorized(_) => 401,
            AppError::BadRequest(_)
            | AppError::MissingInput(_)
            | AppError::MalformedInput(_)
            | AppError::UnsupportedMediaType(_) => 400,
            AppError::MethodNotAllowed(_) => 405,
            AppError::StorageWrite(_)
            | AppError::RecordInsert(_)
            | AppError::RecordDelete(_)
            | AppError::Query(_)
            | AppError::Misconfiguration(_)
            | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlx")]
            AppError::Database(_) => "database_error",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::BadRequest(_) => "bad_request",
            AppError::MissingInput(_) => "missing_input",
            AppError::MalformedInput(_) => "malformed_input",
            AppError::UnsupportedMediaType(_) => "unsupported_media_type",
            AppError::MethodNotAllowed(_) => "method_not_allowed",
            AppError::StorageWrite(_) => "storage_write_failed",
            AppError::RecordInsert(_) => "record_insert_failed",
            AppError::RecordDelete(_) => "record_delete_failed",
            AppError::Query(_) => "query_failed",
            AppError::Misconfiguration(_) => "misconfiguration",
            AppError::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        if self.is_sensitive() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }

    fn is_sensitive(&self) -> bool {
        match self {
            #[cfg(feature = "sqlx")]
            AppError::Database(_) => true,
            AppError::Misconfiguration(_) | AppError::Internal(_) => true,
            _ => false,
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::BadRequest(_)
            | AppError::MissingInput(_)
            | AppError::MalformedInput(_)
            | AppError::UnsupportedMediaType(_)
            | AppError::MethodNotAllowed(_) => LogLevel::Debug,
            AppError::Unauthorized(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}
