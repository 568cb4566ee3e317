//! Handler for the `/articles` slash command.
//!
//! The command text, if any, names the feed to read; otherwise the configured
//! default feed is used. The first page is pushed to the Slack webhook and the
//! command is acknowledged with a short plain-text reply.

use serde_json::Value;
use tracing::info;

use super::context::WebhookContext;
use super::helpers::ok_text;
use super::parsing::{parse_slack_event, sanitize_text_field};
use super::publish::{PublishOutcome, publish_feed_page};
use crate::errors::NumenoError;

/// Handle a slash command from Slack.
///
/// # Errors
/// Returns an error if the body cannot be parsed as a form.
pub async fn handle_articles_command(
    ctx: &WebhookContext,
    body: &str,
) -> Result<Value, NumenoError> {
    let slack_event = parse_slack_event(body)?;
    let text = sanitize_text_field(&slack_event.text);
    let feed_id = if text.is_empty() {
        ctx.config.default_feed_id.as_str()
    } else {
        text.as_str()
    };

    info!(
        feed_id,
        user_id = %slack_event.user_id,
        channel_id = %slack_event.channel_id,
        "Articles command received"
    );

    let outcome = publish_feed_page(ctx, feed_id, None).await;
    if outcome != PublishOutcome::Delivered {
        info!(?outcome, "Articles command finished without delivery");
    }

    Ok(ok_text(&format!("Request {text} received and processed")))
}
