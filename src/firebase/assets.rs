//! Asset resolver: logical image path → downloadable URL.

use async_trait::async_trait;
use log::debug;
use reqwest::Url;
use serde::Deserialize;

use super::FirebaseError;

pub const DEFAULT_STORAGE_BASE_URL: &str = "https://firebasestorage.googleapis.com";

#[async_trait]
pub trait AssetResolver: Send + Sync {
    /// Download URL for the object at `path` (e.g. `button-image/gin.jpg`).
    async fn resolve(&self, path: &str) -> Result<String, FirebaseError>;
}

#[derive(Deserialize, Debug)]
struct ObjectMetadata {
    #[serde(rename = "downloadTokens", default)]
    download_tokens: Option<String>,
}

/// Firebase Storage over its REST API.
pub struct FirebaseStorageResolver {
    base_url: String,
    bucket: String,
    client: reqwest::Client,
}

impl FirebaseStorageResolver {
    pub fn new(base_url: Option<String>, bucket: String) -> Result<Self, FirebaseError> {
        if bucket.trim().is_empty() {
            return Err(FirebaseError::Config("storage bucket is empty".to_string()));
        }
        Ok(Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_STORAGE_BASE_URL.to_string()),
            bucket,
            client: reqwest::Client::new(),
        })
    }

    /// `{base}/v0/b/{bucket}/o/{path}` with the object path as one
    /// percent-encoded segment (`/` becomes `%2F`).
    fn object_url(&self, path: &str) -> Result<Url, FirebaseError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| FirebaseError::Config(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FirebaseError::Config(format!("invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v0", "b", self.bucket.as_str(), "o", path]);
        Ok(url)
    }
}

#[async_trait]
impl AssetResolver for FirebaseStorageResolver {
    async fn resolve(&self, path: &str) -> Result<String, FirebaseError> {
        let url = self.object_url(path)?;
        debug!("Storage metadata GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FirebaseError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(FirebaseError::Api { status, message });
        }

        let meta: ObjectMetadata = response
            .json()
            .await
            .map_err(|e| FirebaseError::Parse(e.to_string()))?;

        let mut download = url;
        {
            let mut query = download.query_pairs_mut();
            query.append_pair("alt", "media");
            // Several tokens may be listed; any of them works
            if let Some(token) = meta
                .download_tokens
                .as_deref()
                .and_then(|t| t.split(',').next())
                .filter(|t| !t.is_empty())
            {
                query.append_pair("token", token);
            }
        }
        Ok(download.to_string())
    }
}
