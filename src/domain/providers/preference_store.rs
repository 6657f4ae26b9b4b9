use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::shared::errors::PreferenceError;

/// User preference marks owned by an external store
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Saved tokens, address -> symbol
    async fn saved_tokens(&self) -> Result<BTreeMap<String, String>, PreferenceError>;

    async fn add_saved_token(&self, address: &str, symbol: &str) -> Result<(), PreferenceError>;

    async fn is_dismissed(&self, path: &str) -> Result<bool, PreferenceError>;

    async fn mark_dismissed(&self, path: &str) -> Result<(), PreferenceError>;
}
