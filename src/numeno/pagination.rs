//! Cursor-following retrieval of a feed's articles.

use async_trait::async_trait;
use tracing::debug;

use crate::core::models::{Article, ArticlePage};
use crate::errors::NumenoError;

/// Anything that can serve a feed one page at a time.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_page(
        &self,
        feed_id: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<ArticlePage, NumenoError>;
}

/// Walks the feed from `start_cursor` until the service stops returning a
/// cursor, accumulating every article in server order.
///
/// A failed fetch ends the walk and the error is returned; articles gathered
/// before the failure are discarded.
pub async fn collect_articles<S>(
    source: &S,
    feed_id: &str,
    start_cursor: Option<&str>,
    limit: u32,
) -> Result<Vec<Article>, NumenoError>
where
    S: ArticleSource + ?Sized,
{
    let mut articles = Vec::new();
    let mut cursor = start_cursor.filter(|c| !c.is_empty()).map(str::to_string);
    let mut pages = 0usize;

    loop {
        let page = source.fetch_page(feed_id, cursor.as_deref(), limit).await?;
        pages += 1;
        debug!(
            feed_id,
            page = pages,
            count = page.articles.len(),
            "Fetched article page"
        );

        let next = page.next_cursor().map(str::to_string);
        articles.extend(page.articles);

        match next {
            Some(c) => cursor = Some(c),
            None => break,
        }
    }

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn article(n: usize) -> Article {
        Article {
            id: format!("a{n}"),
            title: format!("Title {n}"),
            href: format!("https://example.com/{n}"),
            summary: String::new(),
            thumbnail: String::new(),
        }
    }

    /// Serves a fixed list of pages and records the cursors it was asked for.
    struct ScriptedSource {
        pages: Vec<ArticlePage>,
        seen: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<ArticlePage>) -> Self {
            Self {
                pages,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ArticleSource for ScriptedSource {
        async fn fetch_page(
            &self,
            _feed_id: &str,
            cursor: Option<&str>,
            _limit: u32,
        ) -> Result<ArticlePage, NumenoError> {
            let mut seen = self.seen.lock().unwrap();
            let idx = seen.len();
            seen.push(cursor.map(str::to_string));
            self.pages.get(idx).cloned().ok_or(NumenoError::Api {
                status: 404,
                message: "no more pages".into(),
            })
        }
    }

    #[tokio::test]
    async fn concatenates_pages_in_order_with_one_fetch_per_page() {
        let source = ScriptedSource::new(vec![
            ArticlePage {
                articles: vec![article(1), article(2)],
                cursor: Some("c1".into()),
            },
            ArticlePage {
                articles: vec![article(3)],
                cursor: Some("c2".into()),
            },
            ArticlePage {
                articles: vec![article(4), article(5)],
                cursor: None,
            },
        ]);

        let articles = collect_articles(&source, "feed", None, 2).await.unwrap();

        let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "a3", "a4", "a5"]);
        assert_eq!(
            *source.seen.lock().unwrap(),
            vec![None, Some("c1".to_string()), Some("c2".to_string())]
        );
    }

    #[tokio::test]
    async fn empty_cursor_terminates() {
        let source = ScriptedSource::new(vec![ArticlePage {
            articles: vec![article(1)],
            cursor: Some(String::new()),
        }]);

        let articles = collect_articles(&source, "feed", None, 5).await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(source.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn starts_from_given_cursor() {
        let source = ScriptedSource::new(vec![ArticlePage::default()]);
        let articles = collect_articles(&source, "feed", Some("resume"), 5)
            .await
            .unwrap();
        assert!(articles.is_empty());
        assert_eq!(
            *source.seen.lock().unwrap(),
            vec![Some("resume".to_string())]
        );
    }

    #[tokio::test]
    async fn fetch_error_is_returned() {
        let source = ScriptedSource::new(vec![ArticlePage {
            articles: vec![article(1)],
            cursor: Some("c1".into()),
        }]);

        let err = collect_articles(&source, "feed", None, 5).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
