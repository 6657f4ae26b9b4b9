//! Data provider backed by a JSON snapshot of indexer data

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::domain::pair::{PairMap, PairSummary};
use crate::domain::providers::{ListedTokens, TokenDataProvider};
use crate::domain::token::{TokenMetrics, TokenTransaction};
use crate::shared::errors::ProviderError;
use crate::shared::utils::normalize_address;

/// On-disk snapshot layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub tokens: Vec<TokenMetrics>,
    pub pairs: Vec<PairSummary>,
    pub transactions: Vec<TokenTransaction>,
    /// Curated token list; absent means the list is unknown
    pub listed_tokens: Option<Vec<String>>,
}

pub struct SnapshotProvider {
    tokens: HashMap<String, TokenMetrics>,
    pairs: PairMap,
    transactions: Vec<TokenTransaction>,
    listed_tokens: Option<Vec<String>>,
}

impl SnapshotProvider {
    pub fn new(snapshot: Snapshot) -> Self {
        let tokens = snapshot
            .tokens
            .into_iter()
            .map(|token| (normalize_address(&token.id), token))
            .collect();
        let pairs = snapshot
            .pairs
            .into_iter()
            .map(|pair| (normalize_address(&pair.id), pair))
            .collect();

        let mut transactions = snapshot.transactions;
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Self {
            tokens,
            pairs,
            transactions,
            listed_tokens: snapshot.listed_tokens,
        }
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            ProviderError::SnapshotUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .map_err(|e| ProviderError::InvalidData(format!("{}: {}", path.display(), e)))?;

        info!(
            "Loaded snapshot {}: {} tokens, {} pairs, {} transactions",
            path.display(),
            snapshot.tokens.len(),
            snapshot.pairs.len(),
            snapshot.transactions.len()
        );
        Ok(Self::new(snapshot))
    }
}

#[async_trait]
impl TokenDataProvider for SnapshotProvider {
    async fn token_metrics(&self, address: &str) -> Result<Option<TokenMetrics>, ProviderError> {
        let metrics = self.tokens.get(&normalize_address(address)).cloned();
        if metrics.is_none() {
            debug!("No metrics for {} in snapshot", address);
        }
        Ok(metrics)
    }

    async fn token_pairs(&self, address: &str) -> Result<Option<Vec<String>>, ProviderError> {
        Ok(Some(
            self.pairs
                .iter()
                .filter(|(_, pair)| pair.involves(address))
                .map(|(id, _)| id.clone())
                .collect(),
        ))
    }

    async fn pair_data(&self, pair_ids: &[String]) -> Result<Option<PairMap>, ProviderError> {
        Ok(Some(
            pair_ids
                .iter()
                .filter_map(|id| {
                    let key = normalize_address(id);
                    self.pairs.get(&key).map(|pair| (key, pair.clone()))
                })
                .collect(),
        ))
    }

    async fn token_transactions(
        &self,
        address: &str,
    ) -> Result<Option<Vec<TokenTransaction>>, ProviderError> {
        Ok(Some(
            self.transactions
                .iter()
                .filter(|tx| tx.involves(address))
                .cloned()
                .collect(),
        ))
    }
}

#[async_trait]
impl ListedTokens for SnapshotProvider {
    async fn listed_tokens(&self) -> Result<Option<Vec<String>>, ProviderError> {
        Ok(self.listed_tokens.clone())
    }
}
