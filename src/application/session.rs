//! Page data keyed on the token currently displayed

use tracing::debug;

use crate::domain::pair::PairMap;
use crate::domain::token::{TokenMetrics, TokenTransaction};
use crate::shared::utils::same_address;

/// Data published by a provider for one token
#[derive(Debug, Clone)]
pub enum ProviderUpdate {
    Metrics(TokenMetrics),
    Pairs(PairMap),
    Transactions(Vec<TokenTransaction>),
}

/// Raw data for one token page; `None` sections are still loading
#[derive(Debug, Clone)]
pub struct PageData {
    pub address: String,
    pub metrics: TokenMetrics,
    pub pairs: Option<PairMap>,
    pub transactions: Option<Vec<TokenTransaction>>,
}

impl PageData {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            metrics: TokenMetrics::empty(address),
            pairs: None,
            transactions: None,
        }
    }
}

/// Collects provider data for one token and drops anything that belongs to another one
#[derive(Debug)]
pub struct PageSession {
    data: PageData,
}

impl PageSession {
    pub fn new(address: &str) -> Self {
        Self {
            data: PageData::new(address),
        }
    }

    /// Merge an update. Returns false when it was rejected as a whole.
    ///
    /// Pairs and transactions that do not involve the subject token are dropped
    /// one by one; the rest of the update is kept.
    pub fn apply(&mut self, update: ProviderUpdate) -> bool {
        let subject = self.data.address.as_str();

        match update {
            ProviderUpdate::Metrics(metrics) => {
                if !metrics.id.is_empty() && !same_address(&metrics.id, subject) {
                    debug!("Ignoring metrics for {} on page {}", metrics.id, subject);
                    return false;
                }
                self.data.metrics = metrics;
            }
            ProviderUpdate::Pairs(mut pairs) => {
                let before = pairs.len();
                pairs.retain(|_, pair| pair.involves(subject));
                if pairs.len() < before {
                    debug!("Dropped {} pairs not involving {}", before - pairs.len(), subject);
                }
                self.data.pairs = Some(pairs);
            }
            ProviderUpdate::Transactions(mut transactions) => {
                let before = transactions.len();
                transactions.retain(|tx| tx.involves(subject));
                if transactions.len() < before {
                    debug!(
                        "Dropped {} transactions not involving {}",
                        before - transactions.len(),
                        subject
                    );
                }
                self.data.transactions = Some(transactions);
            }
        }
        true
    }

    pub fn into_data(self) -> PageData {
        self.data
    }
}
