use std::{fmt::Display, time::Duration};

use log::{error, info, warn};
use miette::Diagnostic;
use thiserror::Error;

use super::*;

pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".pdf", ".docx"];

/// Value for the file picker's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".docx,.pdf";

/// How long the success state stays on screen before the modal closes.
pub const SUCCESS_DISMISS_DELAY: Duration = Duration::from_secs(2);

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{file_name} is not a PDF or DOCX document")]
    #[diagnostic(help("Only files ending in .pdf or .docx can be uploaded"))]
    UnsupportedExtension { file_name: String },
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("An upload is already in progress")]
    Busy,
}

/// Extension-only, case-sensitive check on the file name.
pub fn validate_file_name(file_name: &str) -> Result<(), ValidationError> {
    if ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| file_name.ends_with(ext))
    {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedExtension {
            file_name: file_name.to_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadFailure {
    Rejected(ValidationError),
    /// The backend answered but said `success: false`.
    Refused { message: String },
    Network,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading {
        file_name: String,
    },
    Success {
        file_name: String,
    },
    Error(UploadFailure),
}

/// Drives the upload modal through `Idle -> Uploading -> Success | Error`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFlow {
    status: UploadStatus,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.status, UploadStatus::Uploading { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, UploadStatus::Error(_))
    }

    /// Moves to `Uploading` if `file_name` may be sent. Invalid names land in
    /// the error state; a file offered mid-upload changes nothing.
    pub fn accept_file(&mut self, file_name: &str) -> Result<(), UploadRejection> {
        if self.is_uploading() {
            warn!("Ignoring {file_name}: an upload is already in progress");
            return Err(UploadRejection::Busy);
        }

        if let Err(e) = validate_file_name(file_name) {
            warn!("{e}");
            self.status = UploadStatus::Error(UploadFailure::Rejected(e.clone()));
            return Err(e.into());
        }

        self.status = UploadStatus::Uploading {
            file_name: file_name.to_owned(),
        };
        Ok(())
    }

    /// Applies the backend's verdict. Returns the file name when the document
    /// was accepted so the caller can tell the conversation.
    pub fn finish<E: Display>(&mut self, outcome: Result<UploadResponse, E>) -> Option<String> {
        let UploadStatus::Uploading { file_name } = &self.status else {
            warn!("Dropping an upload result with no upload pending");
            return None;
        };
        let file_name = file_name.clone();

        match outcome {
            Ok(resp) if resp.success => {
                info!(
                    "Uploaded {file_name}: {} (document id {:?}, {:?} chunks)",
                    resp.message, resp.document_id, resp.chunks_added
                );
                self.status = UploadStatus::Success {
                    file_name: file_name.clone(),
                };
                Some(file_name)
            }
            Ok(resp) => {
                warn!("Backend refused {file_name}: {}", resp.message);
                self.status = UploadStatus::Error(UploadFailure::Refused {
                    message: resp.message,
                });
                None
            }
            Err(e) => {
                error!("Uploading {file_name} failed: {e}");
                self.status = UploadStatus::Error(UploadFailure::Network);
                None
            }
        }
    }

    /// Back to `Idle` when the modal opens or closes. A running upload keeps
    /// going; its result still arrives through [`UploadFlow::finish`].
    pub fn reset(&mut self) {
        if !self.is_uploading() {
            self.status = UploadStatus::Idle;
        }
    }

    pub async fn upload<T: ClientTransport>(
        &mut self,
        api: &ApiClient<T>,
        document: Document,
    ) -> Result<Option<String>, UploadRejection> {
        self.accept_file(&document.name)?;

        let outcome = api.submit_document(document).await;
        Ok(self.finish(outcome))
    }
}
