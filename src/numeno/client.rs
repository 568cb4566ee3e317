//! Shared HTTP plumbing for the Numeno APIs
//!
//! Both the Admin and Article Recommender APIs authenticate with the same
//! `X-Numeno-Key` header and report failures the same way, so the request
//! building and response checking live here.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::NumenoError;

pub const NUMENO_KEY_HEADER: &str = "X-Numeno-Key";

/// Authenticated handle on one Numeno API base URL.
#[derive(Debug, Clone)]
pub struct NumenoClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NumenoClient {
    #[must_use]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_http(Client::new(), base_url, api_key)
    }

    #[must_use]
    pub fn with_http(http: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Numeno request");
        self.http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(NUMENO_KEY_HEADER, &self.api_key)
    }

    /// Sends the request and decodes a JSON body into `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, NumenoError> {
        let resp = check_status(request.send().await?).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(NumenoError::from)
    }

    /// Sends the request and discards whatever body comes back.
    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> Result<(), NumenoError> {
        check_status(request.send().await?).await?;
        Ok(())
    }
}

async fn check_status(resp: Response) -> Result<Response, NumenoError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read body>".to_string());

    Err(NumenoError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pulls a human-readable message out of an error body.
///
/// The API answers with `{"message": ...}` or `{"error": ...}`; anything else
/// is passed through verbatim.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes an opaque identifier for use as a single path segment.
pub(crate) fn segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}
