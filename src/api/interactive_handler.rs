//! Handler for Slack interactive components.
//!
//! Only one interaction is understood: the "Load Next" button rendered under
//! a page of articles. Its value is the cursor to continue from.

use serde_json::Value;
use tracing::{error, info};

use super::context::WebhookContext;
use super::helpers::{err_response, ok_text};
use super::parsing::{parse_interactive_payload, v_array, v_str};
use super::publish::publish_feed_page;
use crate::slack::article_blocks::{CURSOR_ACTION_ID, feed_id_from_block_id};

fn is_cursor_button(action: &Value) -> bool {
    v_str(action, &["type"]) == Some("button")
        && v_str(action, &["action_id"]) == Some(CURSOR_ACTION_ID)
}

/// Handle an interactive payload (`payload=<json>` form body).
pub async fn handle_interaction(ctx: &WebhookContext, body: &str) -> Value {
    let payload = match parse_interactive_payload(body) {
        Ok(v) if v.as_object().is_some_and(|m| !m.is_empty()) => v,
        Ok(_) => {
            error!("Interactive payload is empty");
            return err_response(400, "Invalid payload");
        }
        Err(e) => {
            error!("Interactive payload parse error: {}", e);
            return err_response(400, "Invalid payload");
        }
    };

    if v_str(&payload, &["type"]) != Some("block_actions") {
        return ok_text("No interaction handled");
    }

    let actions = v_array(&payload, &["actions"]).map_or(&[][..], Vec::as_slice);
    let Some(action) = actions.iter().find(|a| is_cursor_button(a)) else {
        return ok_text("No interaction handled");
    };

    let cursor = v_str(action, &["value"]).unwrap_or("");
    let feed_id = v_str(action, &["block_id"])
        .and_then(feed_id_from_block_id)
        .unwrap_or(ctx.config.default_feed_id.as_str());

    info!(
        feed_id,
        cursor,
        user_id = v_str(&payload, &["user", "id"]).unwrap_or(""),
        "Load next button clicked"
    );

    publish_feed_page(ctx, feed_id, Some(cursor)).await;

    ok_text("Button interaction handled")
}
