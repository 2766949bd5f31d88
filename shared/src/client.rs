use log::{debug, warn};
use miette::Diagnostic;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::*;

/// A file picked by the user, ready to be sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    /// Sent as multipart form data under [`UPLOAD_FIELD`].
    File(Document),
}

/// Status and undecoded body of whatever the server sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one POST over the wire. Implemented once per runtime: the browser
/// uses `fetch`, native code uses `reqwest`.
#[async_trait::async_trait(?Send)]
pub trait ClientTransport {
    type Error: std::error::Error + 'static;

    async fn post(&self, url: &str, body: RequestBody) -> Result<RawResponse, Self::Error>;
}

#[derive(Error, Diagnostic, Debug)]
pub enum NetworkError<TransportError>
where
    TransportError: std::fmt::Debug + std::error::Error,
{
    #[error(transparent)]
    Transport(TransportError),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error(transparent)]
    Serialization(serde_json::Error),
    #[error(transparent)]
    Deserialization(serde_json::Error),
}

pub struct ApiClient<T> {
    config: Config,
    transport: T,
}

impl<T: ClientTransport> ApiClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn submit_question(
        &self,
        text: &str,
    ) -> Result<QueryResponse, NetworkError<T::Error>> {
        let req = QueryRequest {
            query: text.to_owned(),
        };
        let body = serde_json::to_value(req).map_err(NetworkError::Serialization)?;

        self.send(ASK_ROUTE, RequestBody::Json(body)).await
    }

    pub async fn submit_document(
        &self,
        document: Document,
    ) -> Result<UploadResponse, NetworkError<T::Error>> {
        self.send(UPLOAD_ROUTE, RequestBody::File(document)).await
    }

    async fn send<R: DeserializeOwned>(
        &self,
        route: &str,
        body: RequestBody,
    ) -> Result<R, NetworkError<T::Error>> {
        let url = self.config.endpoint(route);
        debug!("POST {url}");

        let resp = self
            .transport
            .post(&url, body)
            .await
            .map_err(NetworkError::Transport)?;

        if !resp.is_success() {
            warn!("POST {url} failed with status {}", resp.status);
            return Err(NetworkError::Status(resp.status));
        }
        debug!("POST {url} returned {}", resp.status);

        serde_json::from_str(&resp.body).map_err(NetworkError::Deserialization)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::{cell::RefCell, collections::VecDeque};

    use super::*;

    #[derive(Error, Debug)]
    #[error("connection refused")]
    pub(crate) struct Refused;

    /// Replays queued responses and remembers every request it was handed.
    #[derive(Default)]
    pub(crate) struct MockTransport {
        responses: RefCell<VecDeque<Result<RawResponse, Refused>>>,
        pub(crate) requests: RefCell<Vec<(String, RequestBody)>>,
    }

    impl MockTransport {
        pub(crate) fn respond(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(RawResponse {
                status,
                body: body.to_owned(),
            }));
            self
        }

        pub(crate) fn refuse(self) -> Self {
            self.responses.borrow_mut().push_back(Err(Refused));
            self
        }

        pub(crate) fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait::async_trait(?Send)]
    impl ClientTransport for MockTransport {
        type Error = Refused;

        async fn post(&self, url: &str, body: RequestBody) -> Result<RawResponse, Self::Error> {
            self.requests.borrow_mut().push((url.to_owned(), body));
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no response queued for request")
        }
    }

    pub(crate) fn client(transport: MockTransport) -> ApiClient<MockTransport> {
        let config = Config::new("http://faq.test").unwrap();
        ApiClient::new(config, transport)
    }
}
