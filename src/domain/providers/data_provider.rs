//! Data provider interfaces

use async_trait::async_trait;

use crate::domain::pair::PairMap;
use crate::domain::token::{TokenMetrics, TokenTransaction};
use crate::shared::errors::ProviderError;
use crate::shared::utils::same_address;

/// Source of token, pair and transaction data.
///
/// `Ok(None)` means the data is not loaded yet; the page shows a
/// loading placeholder for it.
#[async_trait]
pub trait TokenDataProvider: Send + Sync {
    async fn token_metrics(&self, address: &str) -> Result<Option<TokenMetrics>, ProviderError>;

    /// Ids of every pair the token is part of
    async fn token_pairs(&self, address: &str) -> Result<Option<Vec<String>>, ProviderError>;

    /// Reserve and constituent data for the given pairs
    async fn pair_data(&self, pair_ids: &[String]) -> Result<Option<PairMap>, ProviderError>;

    async fn token_transactions(
        &self,
        address: &str,
    ) -> Result<Option<Vec<TokenTransaction>>, ProviderError>;
}

/// Membership check against the curated token list
#[async_trait]
pub trait ListedTokens: Send + Sync {
    /// `None` while the list is unknown
    async fn listed_tokens(&self) -> Result<Option<Vec<String>>, ProviderError>;

    async fn is_listed(&self, address: &str) -> Result<Option<bool>, ProviderError> {
        Ok(self
            .listed_tokens()
            .await?
            .map(|listed| listed.iter().any(|token| same_address(token, address))))
    }
}
