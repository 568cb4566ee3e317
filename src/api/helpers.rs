//! Response builders for the webhook Lambda.
//!
//! Slack shows a slash command's plain-text response body to the invoking
//! user, so every response here is `text/plain`.

use serde_json::{Value, json};

/// Returns a 200 OK response with a plain-text body.
#[must_use]
pub fn ok_text(text: &str) -> Value {
    text_response(200, text)
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    text_response(status_code, message)
}

fn text_response(status_code: u16, body: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "text/plain; charset=utf-8" },
        "body": body
    })
}
