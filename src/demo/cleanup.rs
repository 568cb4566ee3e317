//! Best-effort teardown of what the walkthrough created.
//!
//! An empty id means nothing was created, so no call is made. Failures are
//! logged and swallowed; a leaked key or feed is acceptable for a one-shot demo.

use tracing::{info, warn};

use crate::numeno::{AdminClient, ArtRecClient};

pub async fn cleanup_feed(api: &ArtRecClient, feed_id: &str) {
    if feed_id.is_empty() {
        return;
    }
    match api.delete_feed(feed_id).await {
        Ok(()) => info!(feed_id, "Feed deleted successfully"),
        Err(e) => warn!(feed_id, "Error deleting feed: {}", e),
    }
}

pub async fn cleanup_key(admin: &AdminClient, key: &str) {
    if key.is_empty() {
        return;
    }
    match admin.delete_key(key).await {
        Ok(()) => info!("Key deleted successfully"),
        Err(e) => warn!("Error deleting key: {}", e),
    }
}
