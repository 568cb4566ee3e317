//! Numeno Admin API: key management

use reqwest::Method;

use super::client::{NumenoClient, segment};
use crate::core::models::{Key, KeyNew};
use crate::errors::NumenoError;

/// Client for the Admin API, authenticated with an admin key.
#[derive(Debug, Clone)]
pub struct AdminClient {
    client: NumenoClient,
}

impl AdminClient {
    #[must_use]
    pub fn new(base_url: &str, admin_key: &str) -> Self {
        Self {
            client: NumenoClient::new(base_url, admin_key),
        }
    }

    /// Creates a new key restricted to `scopes`.
    pub async fn create_key(&self, scopes: &[&str]) -> Result<Key, NumenoError> {
        let body = KeyNew {
            scopes: scopes.iter().map(|s| (*s).to_string()).collect(),
        };
        let req = self.client.request(Method::POST, "/keys").json(&body);
        self.client.send_json(req).await
    }

    pub async fn get_key(&self, key: &str) -> Result<Key, NumenoError> {
        let req = self
            .client
            .request(Method::GET, &format!("/keys/{}", segment(key)));
        self.client.send_json(req).await
    }

    pub async fn delete_key(&self, key: &str) -> Result<(), NumenoError> {
        let req = self
            .client
            .request(Method::DELETE, &format!("/keys/{}", segment(key)));
        self.client.send_empty(req).await
    }
}
