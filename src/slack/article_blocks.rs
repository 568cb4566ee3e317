//! Maps a page of Numeno articles onto Slack Block Kit blocks.
//!
//! The message is a header section, then a divider and a section per article,
//! a closing divider and, when the feed has more to give, a section carrying
//! the cursor and a "Load Next" button. Clicking that button comes back to us
//! as a `block_actions` interaction whose value is the cursor.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Value, json};

use crate::core::models::{Article, ArticlePage};

pub const HEADER_TEXT: &str = "Your articles, courtesy of Numeno - https://numeno.ai/";

/// Fallback text for notifications and clients that can't render blocks.
pub const MESSAGE_TEXT: &str =
    "These are recommendations from the Numeno Article Recommender API - https://numeno.ai/";

pub const CURSOR_ACTION_ID: &str = "cursor_button";
pub const CURSOR_BLOCK_PREFIX: &str = "cursor_";

pub const SUMMARY_MAX_CHARS: usize = 300;
const ELLIPSIS: &str = "...";

/// Removes HTML-style tags, the same way for summaries and command text.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    static TAG_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"<[^>]*>").expect("static regex compile"));
    TAG_RE.replace_all(text, "").into_owned()
}

/// Strips markup and clamps the summary to [`SUMMARY_MAX_CHARS`] characters,
/// appending an ellipsis when anything was cut.
#[must_use]
pub fn format_summary(summary: &str) -> String {
    let stripped = strip_tags(summary);
    let stripped = stripped.trim();

    match stripped.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &stripped[..cut]),
        None => stripped.to_string(),
    }
}

/// Builds the full block list for one page of `feed_id`.
#[must_use]
pub fn build_article_blocks(feed_id: &str, page: &ArticlePage, page_size: u32) -> Vec<Value> {
    let mut blocks = Vec::with_capacity(page.articles.len() * 2 + 3);

    blocks.push(json!({
        "type": "section",
        "text": { "type": "mrkdwn", "text": HEADER_TEXT }
    }));

    for article in &page.articles {
        blocks.push(divider());
        blocks.push(article_section(article));
    }

    blocks.push(divider());

    if let Some(cursor) = page.next_cursor() {
        blocks.push(cursor_section(feed_id, cursor, page_size));
    }

    blocks
}

/// Wraps blocks into the body posted to the incoming webhook.
#[must_use]
pub fn build_message_payload(blocks: &[Value]) -> Value {
    json!({
        "text": MESSAGE_TEXT,
        "blocks": blocks,
    })
}

/// Recovers the feed id a cursor button was rendered for, if any.
#[must_use]
pub fn feed_id_from_block_id(block_id: &str) -> Option<&str> {
    block_id
        .strip_prefix(CURSOR_BLOCK_PREFIX)
        .filter(|id| !id.is_empty())
}

fn divider() -> Value {
    json!({ "type": "divider" })
}

fn article_section(article: &Article) -> Value {
    json!({
        "type": "section",
        "block_id": format!("section_{}", article.id),
        "text": {
            "type": "mrkdwn",
            "text": format!(
                "<{}|*{}*>\n_{}_",
                article.href,
                article.title,
                format_summary(&article.summary)
            )
        },
        "accessory": {
            "type": "image",
            "image_url": article.thumbnail,
            "alt_text": article.title
        }
    })
}

fn cursor_section(feed_id: &str, cursor: &str, page_size: u32) -> Value {
    json!({
        "type": "section",
        "block_id": format!("{CURSOR_BLOCK_PREFIX}{feed_id}"),
        "text": {
            "type": "mrkdwn",
            "text": format!("Cursor: `{cursor}`")
        },
        "accessory": {
            "type": "button",
            "text": {
                "type": "plain_text",
                "text": format!("Load Next {page_size}"),
                "emoji": true
            },
            "value": cursor,
            "action_id": CURSOR_ACTION_ID
        }
    })
}
