use std::path::Path;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{ErrorDetail, QueryRequest, QueryResponse, UploadResponse, UPLOAD_FIELD};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{AppState, StoredDocument};

/// Extensions the real backend can ingest, compared case-insensitively.
const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".docx", ".txt"];

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Document store is unavailable")]
    Poisoned,
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(%status, "{self}");

        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Serialize)]
pub(crate) struct Health {
    status: &'static str,
}

pub(crate) async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub(crate) async fn ask(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    info!(query = %req.query, "received question");

    let latest = state
        .latest()
        .ok_or_else(|| ApiError::NotFound("No documents found".to_owned()))?;

    let answer = format!(
        "This development server does not read documents, so it cannot answer \"{}\" from {}.",
        req.query, latest.file_name
    );

    Ok(Json(QueryResponse {
        answer: Some(answer),
        success: Some(true),
    }))
}

pub(crate) async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::BadRequest("Missing file name".to_owned()))?;

        let ext = extension(&file_name);
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ApiError::BadRequest(format!("Unsupported file type: {ext}")));
        }

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::BadRequest(format!("{file_name} is empty")));
        }

        let doc = StoredDocument {
            id: Uuid::new_v4(),
            file_name,
            size: bytes.len(),
        };
        info!(file_name = %doc.file_name, size = doc.size, id = %doc.id, "stored document");

        let resp = UploadResponse {
            success: true,
            message: format!("Uploaded {}", doc.file_name),
            document_id: Some(doc.id.to_string()),
            chunks_added: None,
        };
        state.0.lock().map_err(|_| ApiError::Poisoned)?.push(doc);

        return Ok(Json(resp));
    }

    Err(ApiError::BadRequest(format!(
        "Missing multipart field `{UPLOAD_FIELD}`"
    )))
}

/// Lowercased extension with its leading dot, or an empty string.
fn extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::extension;

    #[test]
    fn extension_is_lowercased_with_dot() {
        assert_eq!(extension("Policy.PDF"), ".pdf");
        assert_eq!(extension("archive.tar.gz"), ".gz");
        assert_eq!(extension("README"), "");
    }
}
