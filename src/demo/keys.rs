use tracing::{info, warn};

use crate::core::models::Key;
use crate::errors::NumenoError;
use crate::numeno::AdminClient;

/// Read-write access to feeds and read access to articles is all the
/// walkthrough needs.
pub const DEMO_SCOPES: &[&str] = &["art-rec:feeds:write", "art-rec:articles:read"];

/// Creates a key for the Article Recommender API and logs its info.
///
/// The info lookup only demonstrates the call; if it fails the new key is
/// still returned.
pub async fn create_key(admin: &AdminClient, scopes: &[&str]) -> Result<Key, NumenoError> {
    let key = admin.create_key(scopes).await?;
    info!(scopes = ?key.scopes, "Key created successfully");

    match admin.get_key(&key.key).await {
        Ok(key_info) => info!(scopes = ?key_info.scopes, "Key info retrieved"),
        Err(e) => warn!("Error getting key info: {}", e),
    }

    Ok(key)
}
