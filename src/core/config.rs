use std::env;

use crate::errors::NumenoError;

pub const DEFAULT_ART_REC_URL: &str = "https://api.numeno.ai/art-rec/v1";
pub const DEFAULT_ADMIN_URL: &str = "https://api.numeno.ai/admin/v1";

/// Everything the two entry points read from the environment.
///
/// Loading is lenient: a missing variable becomes an empty string. Each entry
/// point then calls [`AppConfig::require_demo`] or [`AppConfig::require_webhook`]
/// to check the subset it actually needs.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub numeno_admin_key: String,
    pub numeno_api_key: String,
    pub numeno_art_rec_url: String,
    pub numeno_admin_url: String,
    pub default_feed_id: String,
    pub slack_webhook_url: String,
}

impl AppConfig {
    /// Reads the process environment, after loading a `.env` file if one exists.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).unwrap_or_default();
        let url_or = |name: &str, default: &str| {
            let value = var(name);
            if value.is_empty() {
                default.to_string()
            } else {
                value.trim_end_matches('/').to_string()
            }
        };

        Self {
            numeno_admin_key: var("NUMENO_ADMIN_KEY"),
            numeno_api_key: var("NUMENO_API_KEY"),
            numeno_art_rec_url: url_or("NUMENO_ART_REC_ENDPOINT", DEFAULT_ART_REC_URL),
            numeno_admin_url: url_or("NUMENO_ADMIN_ENDPOINT", DEFAULT_ADMIN_URL),
            default_feed_id: var("DEFAULT_FEED_ID"),
            slack_webhook_url: var("SLACK_WEBHOOK_URL"),
        }
    }

    pub fn require_demo(&self) -> Result<(), NumenoError> {
        require("NUMENO_ADMIN_KEY", &self.numeno_admin_key)
    }

    pub fn require_webhook(&self) -> Result<(), NumenoError> {
        require("NUMENO_API_KEY", &self.numeno_api_key)?;
        require("DEFAULT_FEED_ID", &self.default_feed_id)?;
        require("SLACK_WEBHOOK_URL", &self.slack_webhook_url)
    }
}

fn require(name: &str, value: &str) -> Result<(), NumenoError> {
    if value.is_empty() {
        Err(NumenoError::ConfigError(name.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn missing_endpoints_fall_back_to_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.numeno_art_rec_url, DEFAULT_ART_REC_URL);
        assert_eq!(config.numeno_admin_url, DEFAULT_ADMIN_URL);
        assert!(config.numeno_admin_key.is_empty());
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let config = config_from(&[("NUMENO_ART_REC_ENDPOINT", "http://localhost:9000/v1/")]);
        assert_eq!(config.numeno_art_rec_url, "http://localhost:9000/v1");
    }

    #[test]
    fn webhook_requirements_name_the_missing_variable() {
        let config = config_from(&[("NUMENO_API_KEY", "k"), ("DEFAULT_FEED_ID", "f")]);
        let err = config.require_webhook().unwrap_err();
        assert_eq!(err.to_string(), "Missing configuration: SLACK_WEBHOOK_URL");
    }

    #[test]
    fn demo_only_needs_the_admin_key() {
        let config = config_from(&[("NUMENO_ADMIN_KEY", "admin")]);
        assert!(config.require_demo().is_ok());
        assert!(config.require_webhook().is_err());
    }
}
