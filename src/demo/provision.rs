//! Feed and stream creation for the walkthrough.

use futures::future::try_join_all;
use tracing::{error, info};

use crate::core::models::{
    FeedNew, Schedule, ScheduleInterval, Stream, StreamNew, StreamQuery, Topics, Tuner,
    VolumeControl, WeightedTopic,
};
use crate::errors::NumenoError;
use crate::numeno::ArtRecClient;

pub const FEED_NAME: &str = "FriendlyNameOfFeed";
pub const FEED_REFRESH_HOUR: u8 = 20;
pub const TUNER_PROMPT: &str = "Remove from the Feed Articles that are duplicates from one another \
based on overlapping Topics. Remove Articles that are doing too much marketing or promotion. \
Lower the score for listicles.";

/// Approximate number of articles each stream contributes per day.
pub const STREAM_DAILY_RATE: u32 = 25;

/// What provisioning left behind.
///
/// `feed_id` is set whenever the feed exists, even if stream creation failed,
/// so cleanup can still remove it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provisioning {
    pub feed_id: Option<String>,
    pub fully_initialized: bool,
}

#[must_use]
pub fn demo_feed() -> FeedNew {
    FeedNew {
        name: FEED_NAME.to_string(),
        schedule: Schedule {
            interval: ScheduleInterval::Daily,
            hour: FEED_REFRESH_HOUR,
        },
        tuner: Tuner {
            prompt: TUNER_PROMPT.to_string(),
            can_mask: true,
        },
    }
}

fn query(must_have: &[&str], must_not_have: &[&str], should_have: &[(&str, f32)]) -> StreamQuery {
    let owned = |xs: &[&str]| -> Vec<String> { xs.iter().map(|s| (*s).to_string()).collect() };
    StreamQuery {
        topics: Some(Topics {
            must_have: owned(must_have),
            must_not_have: owned(must_not_have),
            should_have: should_have
                .iter()
                .map(|(topic, weight)| WeightedTopic {
                    topic: (*topic).to_string(),
                    weight: *weight,
                })
                .collect(),
        }),
        volume_control: Some(VolumeControl {
            daily_rate: STREAM_DAILY_RATE,
        }),
    }
}

/// Three streams along compassion, awareness and learning.
#[must_use]
pub fn demo_stream_queries() -> Vec<StreamQuery> {
    vec![
        query(
            &["COMPASSION", "LOVE", "EMPATHY"],
            &["HATE"],
            &[("FORGIVENESS", 0.9)],
        ),
        query(
            &["AWARENESS", "MINDFULNESS", "GRATITUDE"],
            &["IGNORANCE"],
            &[("CONSCIOUSNESS", 0.5)],
        ),
        query(
            &["LEARNING", "UNDERSTANDING", "KNOWLEDGE", "WISDOM"],
            &["SELFISHNESS"],
            &[("HUMILITY", 0.5), ("GROWTH", 0.5)],
        ),
    ]
}

/// Creates one stream per query, all at once, named `Test stream 1..N`.
///
/// Fails on the first rejection. Each request runs as its own task, so
/// siblings still in flight when that happens run to completion, and
/// streams that were already created stay on the service.
pub async fn create_streams(
    api: &ArtRecClient,
    feed_id: &str,
    queries: &[StreamQuery],
) -> Result<Vec<Stream>, NumenoError> {
    let tasks: Vec<_> = queries
        .iter()
        .enumerate()
        .map(|(i, query)| {
            let api = api.clone();
            let feed_id = feed_id.to_string();
            let stream = StreamNew {
                name: format!("Test stream {}", i + 1),
                query: query.clone(),
            };
            tokio::spawn(async move { api.create_stream(&feed_id, &stream).await })
        })
        .collect();

    try_join_all(tasks.into_iter().map(|task| async move {
        task.await
            .map_err(|e| NumenoError::HttpError(format!("Stream creation task failed: {e}")))?
    }))
    .await
}

/// Creates the feed, then its streams. Streams are only attempted once the
/// feed exists.
pub async fn provision_feed(
    api: &ArtRecClient,
    feed: &FeedNew,
    queries: &[StreamQuery],
) -> Provisioning {
    let created = match api.create_feed(feed).await {
        Ok(created) => created,
        Err(e) => {
            error!("Error creating feed: {}", e);
            return Provisioning::default();
        }
    };
    info!(feed_id = %created.id, "Feed created successfully");

    let fully_initialized = match create_streams(api, &created.id, queries).await {
        Ok(streams) => {
            let ids: Vec<&str> = streams.iter().map(|s| s.id.as_str()).collect();
            info!(feed_id = %created.id, streams = ?ids, "Streams created successfully");
            true
        }
        Err(e) => {
            error!(feed_id = %created.id, "Error creating streams: {}", e);
            false
        }
    };

    Provisioning {
        feed_id: Some(created.id),
        fully_initialized,
    }
}
