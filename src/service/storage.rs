//! Client for the external object storage service.
//!
//! The storage service is an external collaborator: it receives raw file
//! bytes and answers with a stable public URL. Everything else (folders,
//! deduplication, CDN) lives on its side.

use serde::Deserialize;
use url::Url;

use crate::error::AppError;

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

/// Thin wrapper around `reqwest::Client` for pushing files to object storage.
///
/// Cheap to clone: the inner client is reference-counted.
#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    upload_url: Url,
    api_key: String,
}

impl StorageClient {
    /// Creates a storage client for the configured upload endpoint.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `upload_url` - Endpoint accepting POSTed file bytes
    /// - `api_key` - Bearer token for the storage service
    ///
    /// # Returns
    /// - `Ok(StorageClient)` - Ready-to-use client
    /// - `Err(AppError)` - The endpoint is not a valid URL
    pub fn new(http: reqwest::Client, upload_url: &str, api_key: String) -> Result<Self, AppError> {
        let upload_url = Url::parse(upload_url)
            .map_err(|e| AppError::InternalError(format!("Invalid STORAGE_UPLOAD_URL: {}", e)))?;

        Ok(Self {
            http,
            upload_url,
            api_key,
        })
    }

    /// Uploads file bytes into a storage folder and returns the stored URL.
    ///
    /// # Arguments
    /// - `folder` - Logical folder on the storage side (e.g. "contrats")
    /// - `file_name` - Original file name, kept for display purposes
    /// - `bytes` - Raw file content
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored file
    /// - `Err(AppError)` - Transport failure or non-success response
    pub async fn upload(
        &self,
        folder: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let response = self
            .http
            .post(self.upload_url.clone())
            .query(&[("folder", folder), ("filename", file_name)])
            .bearer_auth(&self.api_key)
            .body(bytes)
            .send()
            .await?
            .error_for_status()?;

        let parsed: UploadResponse = response.json().await?;
        Ok(parsed.url)
    }
}
