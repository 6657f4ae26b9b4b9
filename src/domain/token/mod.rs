//! Token domain - metrics and transaction history for a single token

use serde::{Deserialize, Serialize};

use crate::shared::types::TokenRef;

/// Token metrics as published by the data providers.
///
/// Every numeric field distinguishes "no data yet" (`None`) from a real
/// zero (`Some(0.0)`); formatting depends on that difference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenMetrics {
    pub id: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    #[serde(rename = "priceUSD")]
    pub price_usd: Option<f64>,
    #[serde(rename = "priceChangeUSD")]
    pub price_change_usd: Option<f64>,
    #[serde(rename = "oneDayVolumeUSD")]
    pub one_day_volume_usd: Option<f64>,
    #[serde(rename = "volumeChangeUSD")]
    pub volume_change_usd: Option<f64>,
    #[serde(rename = "oneDayVolumeUT")]
    pub one_day_volume_ut: Option<f64>,
    #[serde(rename = "volumeChangeUT")]
    pub volume_change_ut: Option<f64>,
    #[serde(rename = "totalLiquidityUSD")]
    pub total_liquidity_usd: Option<f64>,
    #[serde(rename = "liquidityChangeUSD")]
    pub liquidity_change_usd: Option<f64>,
    #[serde(rename = "oneDayTxns")]
    pub one_day_txns: Option<u64>,
    #[serde(rename = "txnChange")]
    pub txn_change: Option<f64>,
}

impl TokenMetrics {
    /// Metrics for a token nothing is known about yet
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn symbol_or_empty(&self) -> &str {
        self.symbol.as_deref().unwrap_or("")
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Kind of pool interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Swap,
    Mint,
    Burn,
}

/// A transaction touching one of the token's pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransaction {
    pub hash: String,
    pub kind: TransactionKind,
    pub token0: TokenRef,
    pub token1: TokenRef,
    pub amount0: f64,
    pub amount1: f64,
    #[serde(rename = "amountUSD", default)]
    pub amount_usd: Option<f64>,
    pub account: String,
    /// Unix seconds
    pub timestamp: i64,
}

impl TokenTransaction {
    pub fn involves(&self, address: &str) -> bool {
        self.token0.is(address) || self.token1.is(address)
    }

    pub fn description(&self) -> String {
        match self.kind {
            TransactionKind::Swap => format!("Swap {} for {}", self.token0.symbol, self.token1.symbol),
            TransactionKind::Mint => format!("Add {} and {}", self.token0.symbol, self.token1.symbol),
            TransactionKind::Burn => format!("Remove {} and {}", self.token0.symbol, self.token1.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_keep_zero_and_absent_apart() {
        let metrics: TokenMetrics = serde_json::from_str(
            r#"{
                "id": "0xabc",
                "symbol": "UNI",
                "oneDayVolumeUSD": 0,
                "oneDayVolumeUT": 512.5,
                "totalLiquidityUSD": null
            }"#,
        )
        .unwrap();

        assert_eq!(metrics.one_day_volume_usd, Some(0.0));
        assert_eq!(metrics.one_day_volume_ut, Some(512.5));
        assert_eq!(metrics.total_liquidity_usd, None);
        assert_eq!(metrics.price_usd, None);
        assert_eq!(metrics.symbol_or_empty(), "UNI");
        assert_eq!(metrics.name_or_empty(), "");
    }

    #[test]
    fn test_transaction_description() {
        let tx = TokenTransaction {
            hash: "0x01".to_string(),
            kind: TransactionKind::Mint,
            token0: TokenRef::new("0xaaa", "UNI"),
            token1: TokenRef::new("0xbbb", "WETH"),
            amount0: 1.0,
            amount1: 2.0,
            amount_usd: Some(10.0),
            account: "0xccc".to_string(),
            timestamp: 0,
        };
        assert_eq!(tx.description(), "Add UNI and WETH");
        assert!(tx.involves("0xAAA"));
        assert!(!tx.involves("0xddd"));
    }
}
