/// artrec - demo integrations for the Numeno Article Recommender API.
///
/// This crate contains two independent flows:
/// 1. A scripted walkthrough (`artrec-demo`) that creates a scoped key,
///    provisions a feed with streams, exercises the feed/stream/article
///    operations and cleans up after itself
/// 2. A webhook Lambda (`artrec-webhook`) backing a Slack `/articles` command
///    that renders a page of a feed as Block Kit blocks, with a "Load Next"
///    button to continue through the feed
///
/// # Architecture
///
/// The system uses:
/// - reqwest for every call to the Numeno APIs and the Slack webhook
/// - AWS Lambda for serverless execution of the webhook
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use artrec::core::config::AppConfig;
/// use artrec::numeno::{ArtRecClient, collect_articles};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     artrec::setup_cli_logging();
///
///     let config = AppConfig::from_env();
///     let api = ArtRecClient::new(&config.numeno_art_rec_url, &config.numeno_api_key);
///
///     let articles = collect_articles(&api, &config.default_feed_id, None, 5).await?;
///     for article in &articles {
///         println!("{} - {}", article.title, article.href);
///     }
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod demo;
pub mod errors;
pub mod numeno;
pub mod slack;

pub use errors::NumenoError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda process; repeated calls are ignored.
///
/// # Example
///
/// ```
/// artrec::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("info"))
        .with(fmt_layer)
        .try_init();
}

/// Human-readable logging for the command-line walkthrough, filtered by
/// `RUST_LOG` (defaults to `info`).
pub fn setup_cli_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
