use reqwest::multipart::{Form, Part};

use super::*;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// `reqwest`-backed transport for native callers.
#[derive(Debug, Clone)]
pub struct ReqwestTransport(pub reqwest::Client);

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()?;

        Ok(Self(client))
    }
}

#[async_trait::async_trait(?Send)]
impl ClientTransport for ReqwestTransport {
    type Error = reqwest::Error;

    async fn post(&self, url: &str, body: RequestBody) -> Result<RawResponse, Self::Error> {
        let req = self.0.post(url);
        let req = match body {
            RequestBody::Json(json) => req.json(&json),
            RequestBody::File(document) => {
                let mut part = Part::bytes(document.bytes).file_name(document.name);
                if let Some(content_type) = document.content_type {
                    part = part.mime_str(&content_type)?;
                }
                req.multipart(Form::new().part(UPLOAD_FIELD, part))
            }
        };

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }
}
