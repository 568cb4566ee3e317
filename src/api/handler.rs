//! Webhook Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - Request validation (body presence, base64 decoding)
//! - Interactive components (delegated to `interactive_handler` module)
//! - Slash commands (delegated to `slash_handler` module)

use base64::{Engine as _, engine::general_purpose};
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::context::WebhookContext;
use super::{helpers, interactive_handler, parsing, slash_handler};
use crate::core::config::AppConfig;

pub use self::function_handler as handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Articles,
    Interact,
}

/// Lambda handler for the webhook entrypoint.
///
/// # Errors
///
/// Fails only when the environment lacks required configuration; request
/// problems are answered with a 4xx payload instead.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env();
    config.require_webhook().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let ctx = WebhookContext::from_config(config);
    Ok(route(&ctx, &event.payload).await)
}

/// Routes an API Gateway / function URL event to the matching handler and
/// returns the HTTP response envelope.
pub async fn route(ctx: &WebhookContext, payload: &Value) -> Value {
    let correlation_id = Uuid::new_v4().to_string();
    let span = info_span!("webhook_request", correlation_id = %correlation_id);
    route_inner(ctx, payload).instrument(span).await
}

async fn route_inner(ctx: &WebhookContext, payload: &Value) -> Value {
    let path = payload
        .get("rawPath")
        .and_then(Value::as_str)
        .or_else(|| payload.get("path").and_then(Value::as_str));

    let body = match extract_body(payload) {
        Ok(b) => b,
        Err(response) => return response,
    };

    let endpoint = resolve_endpoint(path, &body);
    info!(path = path.unwrap_or(""), ?endpoint, "Routing webhook request");

    match endpoint {
        Endpoint::Interact => interactive_handler::handle_interaction(ctx, &body).await,
        Endpoint::Articles => match slash_handler::handle_articles_command(ctx, &body).await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to parse Slack command: {}", e);
                helpers::err_response(400, &format!("Parse Error: {e}"))
            }
        },
    }
}

fn resolve_endpoint(path: Option<&str>, body: &str) -> Endpoint {
    if let Some(path) = path.map(|p| p.trim_end_matches('/')) {
        if path.ends_with("/interact") {
            return Endpoint::Interact;
        }
        if path.ends_with("/articles") {
            return Endpoint::Articles;
        }
    }

    if parsing::is_interactive_body(body) {
        Endpoint::Interact
    } else {
        Endpoint::Articles
    }
}

fn extract_body(payload: &Value) -> Result<String, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Ok(body_str.to_string());
    }

    general_purpose::STANDARD
        .decode(body_str)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or_else(|| {
            error!("Request body is not valid base64 UTF-8");
            helpers::err_response(400, "Invalid body format")
        })
}
