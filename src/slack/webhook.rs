//! Delivery of block messages to a Slack incoming webhook.

use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{error, info};

use super::article_blocks::build_message_payload;
use crate::errors::NumenoError;

/// A fixed incoming-webhook URL messages are posted to.
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    url: String,
    http: HttpClient,
}

impl SlackWebhook {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            http: HttpClient::new(),
        }
    }

    /// Posts `{text, blocks}` once. Non-2xx answers come back as
    /// [`NumenoError::DeliveryError`].
    pub async fn post_blocks(&self, blocks: &[Value]) -> Result<(), NumenoError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self
            .http
            .post(&self.url)
            .headers(headers)
            .json(&build_message_payload(blocks))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(
                "Slack webhook POST failed: status={} body={}",
                status, body_text
            );
            return Err(NumenoError::DeliveryError(format!(
                "webhook returned {status}"
            )));
        }

        info!(blocks = blocks.len(), "Delivered blocks to Slack webhook");
        Ok(())
    }
}
