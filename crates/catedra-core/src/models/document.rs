use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A published document: the metadata half of an upload. The binary half
/// lives in blob storage under `storage_key`, reachable at `public_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Document {
    /// Store-assigned identifier; descending order is newest-first.
    pub id: i64,
    pub display_name: String,
    pub storage_key: String,
    pub public_url: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a document record. `id` and `created_at` are assigned
/// by the record store.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub display_name: String,
    pub storage_key: String,
    pub public_url: String,
}

/// Public projection of a document record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: i64,
    pub display_name: String,
    pub public_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        DocumentResponse {
            id: doc.id,
            display_name: doc.display_name,
            public_url: doc.public_url,
            created_at: doc.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            id: 7,
            display_name: "Syllabus".to_string(),
            storage_key: "documents/1700000000000-1_Syllabus.pdf".to_string(),
            public_url: "https://bucket.s3.us-east-1.amazonaws.com/documents/1700000000000-1_Syllabus.pdf"
                .to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn response_projects_public_fields() {
        let doc = sample_document();
        let created_at = doc.created_at;
        let response = DocumentResponse::from(doc);

        assert_eq!(response.id, 7);
        assert_eq!(response.display_name, "Syllabus");
        assert!(response.public_url.ends_with("Syllabus.pdf"));
        assert_eq!(response.created_at, created_at);
    }

    #[test]
    fn response_serializes_with_camel_case_wire_names() {
        let json = serde_json::to_value(DocumentResponse::from(sample_document())).expect("serialize");

        assert!(json.get("displayName").is_some());
        assert!(json.get("publicUrl").is_some());
        assert!(json.get("createdAt").is_some());
        // Storage key is internal; it must not leak into the public shape.
        assert!(json.get("storageKey").is_none());
        assert!(json.get("storage_key").is_none());
    }
}
