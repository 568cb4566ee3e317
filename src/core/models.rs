//! Wire records for the Numeno Admin and Article Recommender APIs.

use serde::{Deserialize, Serialize};

// ============================================================================
// Admin API
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub key: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyNew {
    pub scopes: Vec<String>,
}

// ============================================================================
// Feeds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleInterval {
    Hourly,
    Daily,
    Weekly,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub interval: ScheduleInterval,
    pub hour: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tuner {
    pub prompt: String,
    #[serde(default)]
    pub can_mask: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub tuner: Option<Tuner>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedNew {
    pub name: String,
    pub schedule: Schedule,
    pub tuner: Tuner,
}

/// Partial tuner update; `canMask` is left untouched unless set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TunerUpdate {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_mask: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuner: Option<TunerUpdate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedList {
    #[serde(default)]
    pub feeds: Vec<Feed>,
}

// ============================================================================
// Streams
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTopic {
    pub topic: String,
    pub weight: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topics {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_have: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_not_have: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub should_have: Vec<WeightedTopic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeControl {
    pub daily_rate: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Topics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_control: Option<VolumeControl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: String,
    #[serde(default)]
    pub feed_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub query: Option<StreamQuery>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreamNew {
    pub name: String,
    pub query: StreamQuery,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StreamUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<StreamQuery>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamList {
    #[serde(default)]
    pub streams: Vec<Stream>,
}

// ============================================================================
// Articles
// ============================================================================

/// A recommended article. Produced by the service, never written by us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// One batch of articles plus the cursor for the next batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticlePage {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ArticlePage {
    /// The continuation cursor, treating an empty string the same as no cursor.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }
}
