//! PubChem collaborator: transport, outcome classification, and turning the
//! raw JSON into reply text and attachments.

pub mod attachments;
pub mod classifier;
pub mod client;
pub mod formatter;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use attachments::{AttachmentKind, AttachmentResolver};
pub use classifier::{RetryClassifier, ServiceOutcome};
pub use client::PubChemClient;
pub use formatter::{NormalizedResponse, ResponseFormatterChain};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("PubChem returned HTTP {code}: {message}")]
    Status { code: u16, message: String },
    #[error("could not build request url: {0}")]
    Url(String),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ServiceError {
    /// Non-success status, with the user-facing text from the status table.
    pub fn status(code: u16) -> Self {
        let message = classifier::status_message(code).unwrap_or(classifier::MESSAGE_GENERIC_REQUEST_ERROR);
        ServiceError::Status { code, message: message.to_string() }
    }
}

/// The two lookups the dialog core needs from the compound database.
#[async_trait]
pub trait CompoundService: Send + Sync {
    async fn fetch_properties(
        &self,
        search_criteria: &str,
        identifier_type: &str,
        properties: &[&str],
    ) -> Result<Value, ServiceError>;

    async fn fetch_synonyms(&self, search_criteria: &str, identifier_type: &str) -> Result<Value, ServiceError>;
}
