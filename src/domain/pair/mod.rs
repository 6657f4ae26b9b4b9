//! Pair domain - trading pairs of a token and best-pair selection

mod pair_selector;

pub use pair_selector::{counterpart_token, rank_pairs, select_best_pair};

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::shared::types::TokenRef;

/// Pairs keyed by pair id; ordered so ranking ties resolve the same way every time
pub type PairMap = BTreeMap<String, PairSummary>;

/// Swap fee paid to liquidity providers
pub const LP_FEE_RATE: f64 = 0.003;

/// Enriched pair data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSummary {
    pub id: String,
    pub token0: TokenRef,
    pub token1: TokenRef,
    /// Raw reserve value from the indexer; only used for ranking
    #[serde(rename = "reserveUSD", deserialize_with = "string_or_number", default)]
    pub reserve_usd: String,
    #[serde(rename = "oneDayVolumeUSD", default)]
    pub one_day_volume_usd: Option<f64>,
    #[serde(rename = "oneWeekVolumeUSD", default)]
    pub one_week_volume_usd: Option<f64>,
}

impl PairSummary {
    /// Parsed reserve value, `None` when the raw value is not a finite number
    pub fn reserve_value(&self) -> Option<f64> {
        self.reserve_usd
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    pub fn involves(&self, address: &str) -> bool {
        self.token0.is(address) || self.token1.is(address)
    }

    pub fn display_name(&self) -> String {
        format!("{}-{}", self.token0.symbol, self.token1.symbol)
    }

    pub fn one_day_fees_usd(&self) -> Option<f64> {
        self.one_day_volume_usd.map(|volume| volume * LP_FEE_RATE)
    }
}

/// Indexers return reserves either as decimal strings or as JSON numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
