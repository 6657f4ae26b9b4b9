//! Common types used across the application

use serde::{Deserialize, Serialize};

use super::utils::same_address;

/// Reference to a token by address, as embedded in pairs and transactions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRef {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
}

impl TokenRef {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }

    /// Addresses are hex and compare without regard to case
    pub fn is(&self, address: &str) -> bool {
        same_address(&self.id, address)
    }
}
