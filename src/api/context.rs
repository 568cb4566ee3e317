use crate::core::config::AppConfig;
use crate::numeno::ArtRecClient;
use crate::slack::SlackWebhook;

/// Clients and settings one webhook invocation works with.
#[derive(Debug, Clone)]
pub struct WebhookContext {
    pub config: AppConfig,
    pub art_rec: ArtRecClient,
    pub slack: SlackWebhook,
}

impl WebhookContext {
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let art_rec = ArtRecClient::new(&config.numeno_art_rec_url, &config.numeno_api_key);
        let slack = SlackWebhook::new(&config.slack_webhook_url);
        Self {
            config,
            art_rec,
            slack,
        }
    }
}
