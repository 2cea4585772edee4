//! Remote document store access.
//!
//! Collections hold schemaless JSON documents. Repository implementations
//! decode documents individually; ones that no longer decode are skipped
//! and counted, never failing a whole fetch.

mod client;
mod listing_repository_impl;
mod review_repository_impl;
mod user_repository_impl;

#[cfg(test)]
mod tests;

pub use client::DocStoreClient;
pub use listing_repository_impl::DocStoreListingRepository;
pub use review_repository_impl::DocStoreReviewRepository;
pub use user_repository_impl::DocStoreUserRepository;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a batch of documents, dropping and counting the malformed ones
pub(crate) fn decode_documents<T: DeserializeOwned>(
    resource: &str,
    documents: Vec<Value>,
) -> (Vec<T>, usize) {
    let mut decoded = Vec::with_capacity(documents.len());
    let mut skipped = 0usize;

    for document in documents {
        let id = document
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("<missing id>")
            .to_string();
        match serde_json::from_value::<T>(document) {
            Ok(value) => decoded.push(value),
            Err(error) => {
                skipped += 1;
                tracing::debug!(
                    resource = resource,
                    document_id = %id,
                    error = %error,
                    "Skipping malformed document"
                );
            }
        }
    }

    (decoded, skipped)
}
