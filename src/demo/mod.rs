//! Scripted walkthrough of the Admin and Article Recommender APIs.
//!
//! Creates a scoped key, provisions a feed with three streams, demonstrates
//! stream and feed operations, then deletes the feed and key again. Each step
//! logs its own failure; later steps run only when the results they depend on
//! exist.

pub mod cleanup;
pub mod keys;
pub mod provision;
pub mod walkthrough;

use tracing::{error, info};

use crate::numeno::{AdminClient, ArtRecClient};

/// Summary of a walkthrough run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoReport {
    pub key_created: bool,
    pub feed_id: Option<String>,
    pub feed_fully_initialized: bool,
    pub streams_demonstrated: bool,
    pub feeds_demonstrated: bool,
    pub articles_retrieved: usize,
}

/// Runs the full walkthrough. The Article Recommender client is built from
/// the key created here, against `art_rec_base_url`.
pub async fn run(admin: &AdminClient, art_rec_base_url: &str) -> DemoReport {
    let mut report = DemoReport::default();

    let key = match keys::create_key(admin, keys::DEMO_SCOPES).await {
        Ok(key) => key,
        Err(e) => {
            error!("Error creating key: {}", e);
            info!("Aborting");
            return report;
        }
    };
    report.key_created = true;

    let art_rec = ArtRecClient::new(art_rec_base_url, &key.key);

    let provisioning = provision::provision_feed(
        &art_rec,
        &provision::demo_feed(),
        &provision::demo_stream_queries(),
    )
    .await;
    report.feed_id = provisioning.feed_id.clone();
    report.feed_fully_initialized = provisioning.fully_initialized;

    if let (Some(feed_id), true) = (&provisioning.feed_id, provisioning.fully_initialized) {
        match walkthrough::stream_operations(&art_rec, feed_id).await {
            Ok(demonstrated) => report.streams_demonstrated = demonstrated,
            Err(e) => error!(feed_id = %feed_id, "Error during stream operations: {}", e),
        }

        match walkthrough::feed_operations(&art_rec, feed_id).await {
            Ok(articles) => {
                report.feeds_demonstrated = true;
                report.articles_retrieved = articles.len();
            }
            Err(e) => error!(feed_id = %feed_id, "Error during feed operations: {}", e),
        }
    }

    cleanup::cleanup_feed(&art_rec, provisioning.feed_id.as_deref().unwrap_or("")).await;
    cleanup::cleanup_key(admin, &key.key).await;

    report
}
