use serde::{Deserialize, Serialize};

pub mod client;
pub mod config;
pub mod conversation;
#[cfg(feature = "reqwest")]
pub mod native;
pub mod upload;

pub use client::{ApiClient, ClientTransport, Document, NetworkError, RawResponse, RequestBody};
pub use config::{Config, ConfigError};
pub use conversation::{Conversation, Message};
pub use upload::{UploadFailure, UploadFlow, UploadRejection, UploadStatus, ValidationError};

pub const ASK_ROUTE: &str = "/ask";
pub const UPLOAD_ROUTE: &str = "/upload";

/// Multipart field the backend reads the document from.
pub const UPLOAD_FIELD: &str = "file";

pub const NO_ANSWER_FALLBACK: &str =
    "I apologize, but I couldn't find an answer to your question.";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl QueryResponse {
    /// The answer to show the user. Missing and blank answers fall back to a
    /// fixed apology.
    pub fn answer_text(&self) -> &str {
        match self.answer.as_deref() {
            Some(answer) if !answer.trim().is_empty() => answer,
            _ => NO_ANSWER_FALLBACK,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(
        rename = "documentId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks_added: Option<u32>,
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}
