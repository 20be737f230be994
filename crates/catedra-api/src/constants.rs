//! API constants

/// Header carrying the professor's shared secret.
pub const PROFESSOR_PASSWORD_HEADER: &str = "x-professor-password";

/// The only accepted MIME type for uploaded files.
pub const ACCEPTED_CONTENT_TYPE: &str = "application/pdf";

/// Multipart field carrying the public display name of a document.
pub const DISPLAY_NAME_FIELD: &str = "nombre";

/// Prefix under which document blobs are stored.
pub const STORAGE_KEY_PREFIX: &str = "documents";
