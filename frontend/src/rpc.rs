use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use shared::{ClientTransport, Document, RawResponse, RequestBody, UPLOAD_FIELD};
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FormData};

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error(transparent)]
    Http(#[from] gloo_net::Error),
    #[error("Browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for FrontendError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// `fetch`-backed transport for the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl ClientTransport for GlooTransport {
    type Error = FrontendError;

    async fn post(&self, url: &str, body: RequestBody) -> Result<RawResponse, Self::Error> {
        let req = match body {
            RequestBody::Json(json) => Request::post(url).json(&json)?,
            RequestBody::File(document) => Request::post(url).body(form_data(&document)?),
        };

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }
}

fn form_data(document: &Document) -> Result<FormData, FrontendError> {
    let bytes = Uint8Array::from(document.bytes.as_slice());
    let mut options = BlobPropertyBag::new();
    if let Some(content_type) = &document.content_type {
        options.type_(content_type);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&Array::of1(&bytes), &options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &document.name)?;

    Ok(form)
}

/// Reads a picked or dropped file into memory.
pub async fn read_document(file: &File) -> Result<Document, FrontendError> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    let document = Document::new(file.name(), bytes);
    let content_type = file.type_();

    Ok(if content_type.is_empty() {
        document
    } else {
        document.with_content_type(content_type)
    })
}
