//! Document store backing the personality wheel.
//!
//! The wheel reads three collections (`adjectives`, `names`, `ingredients`)
//! whose documents are keyed `1..=N` and carry a single `name` string field.

use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use serde::Deserialize;

use super::FirebaseError;

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// A fetched document: its id plus raw typed field values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub id: String,
    pub fields: HashMap<String, serde_json::Value>,
}

impl Document {
    /// The `stringValue` of a field, if the field exists and is a string.
    pub fn string_field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|v| v.get("stringValue"))
            .and_then(|v| v.as_str())
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches `collection/id`; `None` if it doesn't exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, FirebaseError>;
}

/// Firestore REST wire format for a single document
#[derive(Deserialize, Debug)]
struct FirestoreDocument {
    #[serde(default)]
    fields: HashMap<String, serde_json::Value>,
}

/// Firestore over its REST API.
pub struct FirestoreStore {
    base_url: String,
    project_id: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl FirestoreStore {
    pub fn new(
        base_url: Option<String>,
        project_id: String,
        api_key: Option<String>,
    ) -> Result<Self, FirebaseError> {
        if project_id.trim().is_empty() {
            return Err(FirebaseError::Config("project id is empty".to_string()));
        }
        let base_url = base_url.unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string());
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id,
            api_key,
            client: reqwest::Client::new(),
        })
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url, self.project_id, collection, id
        )
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, FirebaseError> {
        let url = self.document_url(collection, id);
        debug!("Firestore GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| FirebaseError::Network(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Firestore document {}/{} not found", collection, id);
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Firestore error: {} - {}", status, message);
            return Err(FirebaseError::Api { status, message });
        }

        let doc: FirestoreDocument = response
            .json()
            .await
            .map_err(|e| FirebaseError::Parse(e.to_string()))?;
        Ok(Some(Document {
            id: id.to_string(),
            fields: doc.fields,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_url() {
        let store = FirestoreStore::new(None, "barcart-demo".to_string(), None).unwrap();
        assert_eq!(
            store.document_url("names", "4"),
            "https://firestore.googleapis.com/v1/projects/barcart-demo/databases/(default)/documents/names/4"
        );
    }

    #[test]
    fn test_empty_project_rejected() {
        assert!(matches!(
            FirestoreStore::new(None, " ".to_string(), None),
            Err(FirebaseError::Config(_))
        ));
    }

    #[test]
    fn test_string_field() {
        let doc = Document {
            id: "1".to_string(),
            fields: HashMap::from([
                ("name".to_string(), json!({ "stringValue": "Fearless" })),
                ("rank".to_string(), json!({ "integerValue": "3" })),
            ]),
        };
        assert_eq!(doc.string_field("name"), Some("Fearless"));
        assert_eq!(doc.string_field("rank"), None);
        assert_eq!(doc.string_field("missing"), None);
    }
}
