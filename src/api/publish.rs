//! The fetch → render → deliver pipeline shared by both inbound endpoints.

use tracing::{error, info};

use super::context::WebhookContext;
use crate::numeno::ArticleSource;
use crate::slack::article_blocks::build_article_blocks;

/// Articles fetched per invocation; also the count on the "Load Next" button.
pub const PAGE_SIZE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Delivered,
    FetchFailed,
    DeliveryFailed,
}

/// Fetches one page of `feed_id` starting at `cursor` and posts it to Slack.
///
/// Failures are logged and reported through the outcome only; callers answer
/// Slack with success either way.
pub async fn publish_feed_page(
    ctx: &WebhookContext,
    feed_id: &str,
    cursor: Option<&str>,
) -> PublishOutcome {
    let page = match ctx.art_rec.fetch_page(feed_id, cursor, PAGE_SIZE).await {
        Ok(page) => page,
        Err(e) => {
            error!(feed_id, "Failed to fetch articles: {}", e);
            return PublishOutcome::FetchFailed;
        }
    };

    info!(
        feed_id,
        count = page.articles.len(),
        has_more = page.next_cursor().is_some(),
        "Fetched article page"
    );

    let blocks = build_article_blocks(feed_id, &page, PAGE_SIZE);

    match ctx.slack.post_blocks(&blocks).await {
        Ok(()) => PublishOutcome::Delivered,
        Err(e) => {
            error!(feed_id, "Failed to push blocks to Slack: {}", e);
            PublishOutcome::DeliveryFailed
        }
    }
}
