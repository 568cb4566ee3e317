//! Numeno Article Recommender API: feeds, streams and articles

use async_trait::async_trait;
use reqwest::Method;

use super::client::{NumenoClient, segment};
use super::pagination::ArticleSource;
use crate::core::models::{
    Article, ArticlePage, Feed, FeedList, FeedNew, FeedUpdate, Stream, StreamList, StreamNew,
    StreamUpdate,
};
use crate::errors::NumenoError;

/// Client for the Article Recommender API.
#[derive(Debug, Clone)]
pub struct ArtRecClient {
    client: NumenoClient,
}

impl ArtRecClient {
    #[must_use]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: NumenoClient::new(base_url, api_key),
        }
    }

    // ------------------------------------------------------------------------
    // Feeds
    // ------------------------------------------------------------------------

    pub async fn create_feed(&self, feed: &FeedNew) -> Result<Feed, NumenoError> {
        let req = self.client.request(Method::POST, "/feeds").json(feed);
        self.client.send_json(req).await
    }

    pub async fn get_feeds(&self) -> Result<Vec<Feed>, NumenoError> {
        let req = self.client.request(Method::GET, "/feeds");
        let list: FeedList = self.client.send_json(req).await?;
        Ok(list.feeds)
    }

    pub async fn get_feed(&self, id: &str) -> Result<Feed, NumenoError> {
        let req = self.client.request(Method::GET, &feed_path(id));
        self.client.send_json(req).await
    }

    pub async fn update_feed(&self, id: &str, update: &FeedUpdate) -> Result<Feed, NumenoError> {
        let req = self
            .client
            .request(Method::PATCH, &feed_path(id))
            .json(update);
        self.client.send_json(req).await
    }

    pub async fn delete_feed(&self, id: &str) -> Result<(), NumenoError> {
        let req = self.client.request(Method::DELETE, &feed_path(id));
        self.client.send_empty(req).await
    }

    /// Asks the service to regenerate the feed ahead of its schedule.
    pub async fn refresh_feed(&self, id: &str) -> Result<(), NumenoError> {
        let req = self
            .client
            .request(Method::POST, &format!("{}/refresh", feed_path(id)));
        self.client.send_empty(req).await
    }

    // ------------------------------------------------------------------------
    // Streams
    // ------------------------------------------------------------------------

    pub async fn create_stream(
        &self,
        feed_id: &str,
        stream: &StreamNew,
    ) -> Result<Stream, NumenoError> {
        let req = self
            .client
            .request(Method::POST, &streams_path(feed_id))
            .json(stream);
        self.client.send_json(req).await
    }

    pub async fn get_streams(&self, feed_id: &str) -> Result<Vec<Stream>, NumenoError> {
        let req = self.client.request(Method::GET, &streams_path(feed_id));
        let list: StreamList = self.client.send_json(req).await?;
        Ok(list.streams)
    }

    pub async fn get_stream(&self, feed_id: &str, id: &str) -> Result<Stream, NumenoError> {
        let req = self
            .client
            .request(Method::GET, &stream_path(feed_id, id));
        self.client.send_json(req).await
    }

    pub async fn update_stream(
        &self,
        feed_id: &str,
        id: &str,
        update: &StreamUpdate,
    ) -> Result<Stream, NumenoError> {
        let req = self
            .client
            .request(Method::PATCH, &stream_path(feed_id, id))
            .json(update);
        self.client.send_json(req).await
    }

    pub async fn delete_stream(&self, feed_id: &str, id: &str) -> Result<(), NumenoError> {
        let req = self
            .client
            .request(Method::DELETE, &stream_path(feed_id, id));
        self.client.send_empty(req).await
    }

    // ------------------------------------------------------------------------
    // Articles
    // ------------------------------------------------------------------------

    /// Fetches one page of a feed's articles.
    pub async fn get_articles_in_feed(
        &self,
        feed_id: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<ArticlePage, NumenoError> {
        let mut req = self
            .client
            .request(Method::GET, &format!("{}/articles", feed_path(feed_id)))
            .query(&[("limit", limit.to_string())]);
        if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
            req = req.query(&[("cursor", cursor)]);
        }
        self.client.send_json(req).await
    }

    pub async fn get_article(&self, id: &str) -> Result<Article, NumenoError> {
        let req = self
            .client
            .request(Method::GET, &format!("/articles/{}", segment(id)));
        self.client.send_json(req).await
    }
}

#[async_trait]
impl ArticleSource for ArtRecClient {
    async fn fetch_page(
        &self,
        feed_id: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<ArticlePage, NumenoError> {
        self.get_articles_in_feed(feed_id, cursor, limit).await
    }
}

fn feed_path(id: &str) -> String {
    format!("/feeds/{}", segment(id))
}

fn streams_path(feed_id: &str) -> String {
    format!("{}/streams", feed_path(feed_id))
}

fn stream_path(feed_id: &str, id: &str) -> String {
    format!("{}/{}", streams_path(feed_id), segment(id))
}
