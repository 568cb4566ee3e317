//! Read/update/delete demonstrations run against a provisioned feed.

use tracing::{info, warn};

use crate::core::models::{Article, FeedUpdate, StreamUpdate, TunerUpdate};
use crate::errors::NumenoError;
use crate::numeno::{ArtRecClient, collect_articles};

pub const UPDATED_STREAM_NAME: &str = "Updated Stream Name";
pub const TUNER_ADDENDUM: &str =
    " Also attempt to filter out articles that are overly hostile or toxic in tone.";

/// Articles are fetched five at a time to exercise pagination.
pub const ARTICLE_PAGE_SIZE: u32 = 5;

/// Lists the feed's streams, then reads, renames and deletes the first one.
///
/// Returns `false` when the feed has no stream to work on.
pub async fn stream_operations(api: &ArtRecClient, feed_id: &str) -> Result<bool, NumenoError> {
    let streams = api.get_streams(feed_id).await?;
    info!(feed_id, count = streams.len(), "Streams retrieved successfully");

    let Some(first) = streams.first() else {
        warn!(feed_id, "Feed has no streams to demonstrate with");
        return Ok(false);
    };

    let stream = api.get_stream(feed_id, &first.id).await?;
    info!(stream_id = %stream.id, name = %stream.name, "Stream retrieved successfully");

    let update = StreamUpdate {
        name: Some(UPDATED_STREAM_NAME.to_string()),
        query: None,
    };
    let updated = api.update_stream(feed_id, &stream.id, &update).await?;
    info!(stream_id = %updated.id, name = %updated.name, "Stream updated successfully");

    api.delete_stream(feed_id, &stream.id).await?;
    info!(stream_id = %stream.id, "Stream deleted successfully");

    Ok(true)
}

/// Lists feeds, extends the tuner prompt, refreshes the feed and pages
/// through all of its articles.
pub async fn feed_operations(
    api: &ArtRecClient,
    feed_id: &str,
) -> Result<Vec<Article>, NumenoError> {
    let feeds = api.get_feeds().await?;
    info!(count = feeds.len(), "Feeds retrieved successfully");

    let feed = api.get_feed(feed_id).await?;
    info!(feed_id, name = %feed.name, "Feed retrieved successfully");

    // Keep the existing prompt, which already de-dupes reasonably well.
    let existing_prompt = feed.tuner.map(|t| t.prompt).unwrap_or_default();
    let update = FeedUpdate {
        tuner: Some(TunerUpdate {
            prompt: format!("{existing_prompt}{TUNER_ADDENDUM}"),
            can_mask: None,
        }),
        ..Default::default()
    };
    api.update_feed(feed_id, &update).await?;
    info!(feed_id, "Feed updated successfully");

    api.refresh_feed(feed_id).await?;
    info!(feed_id, "Feed refreshed successfully");

    let articles = collect_articles(api, feed_id, None, ARTICLE_PAGE_SIZE).await?;
    info!(feed_id, count = articles.len(), "Articles retrieved successfully");

    if let Some(first) = articles.first() {
        match api.get_article(&first.id).await {
            Ok(article) => info!(
                article_id = %article.id,
                href = %article.href,
                "Article retrieved by id"
            ),
            Err(e) => warn!(article_id = %first.id, "Error getting article: {}", e),
        }
    }

    Ok(articles)
}
