//! HTTP client for the remote document store.
//!
//! The store exposes collections of schemaless JSON documents:
//!
//! - `GET  /v1/{collection}` lists documents as `{"documents": [...]}`
//! - `GET  /v1/{collection}/{id}` fetches one document
//! - `PUT  /v1/{collection}/{id}` replaces one document
//! - `DELETE /v1/{collection}/{id}` removes one document
//! - Sub-collections nest one level: `/v1/{collection}/{id}/{sub}`

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use rn_shared::config::docstore::DocStoreConfig;

use crate::InfrastructureError;

/// Wire shape of a collection listing
#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<Value>,
}

/// Document store HTTP client
pub struct DocStoreClient {
    http: reqwest::Client,
    config: DocStoreConfig,
}

impl DocStoreClient {
    /// Create a new client from configuration
    pub fn new(config: DocStoreConfig) -> Result<Self, InfrastructureError> {
        if config.base_url.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "Document store base URL is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// URL for a collection
    fn collection_url(&self, collection: &str) -> String {
        format!("{}/v1/{}", self.config.trimmed_base_url(), collection)
    }

    /// URL for a document
    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }

    /// URL for a sub-collection under a document
    fn subcollection_url(&self, collection: &str, id: &str, sub: &str) -> String {
        format!("{}/{}", self.document_url(collection, id), sub)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }
        builder
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, InfrastructureError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(InfrastructureError::Api {
            status: status.as_u16(),
            message: message.chars().take(200).collect(),
        })
    }

    /// List every document in a collection
    pub async fn list_documents(&self, collection: &str) -> Result<Vec<Value>, InfrastructureError> {
        let url = self.collection_url(collection);
        debug!(url = %url, "Listing documents");

        let response = self.request(reqwest::Method::GET, &url).send().await?;
        let response = Self::check_status(response).await?;
        let list: DocumentList = response.json().await?;
        Ok(list.documents)
    }

    /// Fetch one document, `None` when the store has no such id
    pub async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Value>, InfrastructureError> {
        let url = self.document_url(collection, id);
        debug!(url = %url, "Fetching document");

        let response = self.request(reqwest::Method::GET, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check_status(response).await?;
        Ok(Some(response.json().await?))
    }

    /// Create or replace a document
    pub async fn put_document(
        &self,
        collection: &str,
        id: &str,
        document: &Value,
    ) -> Result<(), InfrastructureError> {
        let url = self.document_url(collection, id);
        debug!(url = %url, "Writing document");

        let response = self
            .request(reqwest::Method::PUT, &url)
            .json(document)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Delete a document, `false` when the store has no such id
    pub async fn delete_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<bool, InfrastructureError> {
        let url = self.document_url(collection, id);
        debug!(url = %url, "Deleting document");

        let response = self.request(reqwest::Method::DELETE, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::check_status(response).await?;
        Ok(true)
    }

    /// List every document in a sub-collection
    pub async fn list_subcollection(
        &self,
        collection: &str,
        id: &str,
        sub: &str,
    ) -> Result<Vec<Value>, InfrastructureError> {
        let url = self.subcollection_url(collection, id, sub);
        debug!(url = %url, "Listing sub-collection");

        let response = self.request(reqwest::Method::GET, &url).send().await?;
        let response = Self::check_status(response).await?;
        let list: DocumentList = response.json().await?;
        Ok(list.documents)
    }

    /// Create or replace a document inside a sub-collection
    pub async fn put_subdocument(
        &self,
        collection: &str,
        id: &str,
        sub: &str,
        doc_id: &str,
        document: &Value,
    ) -> Result<(), InfrastructureError> {
        let url = format!("{}/{}", self.subcollection_url(collection, id, sub), doc_id);
        debug!(url = %url, "Writing sub-collection document");

        let response = self
            .request(reqwest::Method::PUT, &url)
            .json(document)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn url_for_tests(&self, collection: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => self.document_url(collection, id),
            None => self.collection_url(collection),
        }
    }
}
