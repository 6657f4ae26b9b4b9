//! Per-metric display rules.
//!
//! Each rule maps an optional value to a string. Absent and zero are
//! different inputs and several rules give them different outputs.

use serde::Serialize;

use super::currency::{format_percent, format_usd, group_digits};
use crate::domain::token::TokenMetrics;

/// Placeholder for a metric with no data
pub const PLACEHOLDER: &str = "-";

/// Formatted 24h volume and the source it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeDisplay {
    pub text: String,
    pub untracked: bool,
}

/// Price: currency when present, empty when absent
pub fn format_price(price: Option<f64>) -> String {
    price.map(format_usd).unwrap_or_default()
}

/// Volume: tracked value, falling back to untracked volume only when the
/// tracked value is exactly zero. A missing tracked value is a placeholder.
pub fn format_volume(tracked: Option<f64>, untracked: Option<f64>) -> VolumeDisplay {
    match tracked {
        None => VolumeDisplay {
            text: PLACEHOLDER.to_string(),
            untracked: false,
        },
        Some(volume) if volume == 0.0 => VolumeDisplay {
            text: format_usd(untracked.unwrap_or(0.0)),
            untracked: true,
        },
        Some(volume) => VolumeDisplay {
            text: format_usd(volume),
            untracked: false,
        },
    }
}

pub fn format_liquidity(liquidity: Option<f64>) -> String {
    match liquidity {
        None => PLACEHOLDER.to_string(),
        Some(value) if value == 0.0 => "$0".to_string(),
        Some(value) => format_usd(value),
    }
}

pub fn format_txn_count(count: Option<u64>) -> String {
    match count {
        None => PLACEHOLDER.to_string(),
        Some(0) => "0".to_string(),
        Some(n) => group_digits(n),
    }
}

/// All summary metrics of a token, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMetrics {
    pub price: String,
    pub price_change: String,
    pub volume: VolumeDisplay,
    pub volume_change: String,
    pub liquidity: String,
    pub liquidity_change: String,
    pub transactions: String,
    pub transactions_change: String,
}

impl FormattedMetrics {
    pub fn from_metrics(metrics: &TokenMetrics) -> Self {
        let volume = format_volume(metrics.one_day_volume_usd, metrics.one_day_volume_ut);
        // the change must come from the same source as the volume itself
        let volume_change = if volume.untracked {
            format_percent(metrics.volume_change_ut)
        } else {
            format_percent(metrics.volume_change_usd)
        };

        Self {
            price: format_price(metrics.price_usd),
            price_change: format_percent(metrics.price_change_usd),
            volume,
            volume_change,
            liquidity: format_liquidity(metrics.total_liquidity_usd),
            liquidity_change: format_percent(metrics.liquidity_change_usd),
            transactions: format_txn_count(metrics.one_day_txns),
            transactions_change: format_percent(metrics.txn_change),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price() {
        assert_eq!(format_price(None), "");
        assert_eq!(format_price(Some(0.0)), "$0");
        assert_eq!(format_price(Some(4.2512)), "$4.25");
    }

    #[test]
    fn test_volume_zero_falls_back_to_untracked() {
        let volume = format_volume(Some(0.0), Some(500.0));
        assert_eq!(volume.text, "$500.00");
        assert!(volume.untracked);
    }

    #[test]
    fn test_volume_absent_is_placeholder() {
        let volume = format_volume(None, Some(500.0));
        assert_eq!(volume.text, "-");
        assert!(!volume.untracked);
    }

    #[test]
    fn test_volume_tracked() {
        let volume = format_volume(Some(1234.5), Some(500.0));
        assert_eq!(volume.text, "$1,235");
        assert!(!volume.untracked);
    }

    #[test]
    fn test_volume_zero_without_untracked() {
        let volume = format_volume(Some(0.0), None);
        assert_eq!(volume.text, "$0");
        assert!(volume.untracked);
    }

    #[test]
    fn test_liquidity() {
        assert_eq!(format_liquidity(Some(0.0)), "$0");
        assert_eq!(format_liquidity(None), "-");
        assert_eq!(format_liquidity(Some(1_000_000.0)), "$1,000,000");
    }

    #[test]
    fn test_txn_count() {
        assert_eq!(format_txn_count(None), "-");
        assert_eq!(format_txn_count(Some(0)), "0");
        assert_eq!(format_txn_count(Some(15_230)), "15,230");
    }

    #[test]
    fn test_change_is_empty_when_absent_but_not_placeholder() {
        let formatted = FormattedMetrics::from_metrics(&TokenMetrics::empty("0xabc"));
        assert_eq!(formatted.price, "");
        assert_eq!(formatted.price_change, "");
        assert_eq!(formatted.liquidity, "-");
        assert_eq!(formatted.liquidity_change, "");
        assert_eq!(formatted.volume.text, "-");
        assert_eq!(formatted.transactions, "-");
        assert_eq!(formatted.transactions_change, "");
    }

    #[test]
    fn test_volume_change_follows_volume_source() {
        let metrics = TokenMetrics {
            one_day_volume_usd: Some(0.0),
            one_day_volume_ut: Some(800.0),
            volume_change_usd: Some(12.0),
            volume_change_ut: Some(-4.5),
            ..TokenMetrics::empty("0xabc")
        };
        let formatted = FormattedMetrics::from_metrics(&metrics);
        assert!(formatted.volume.untracked);
        assert_eq!(formatted.volume_change, "-4.50%");

        let tracked = TokenMetrics {
            one_day_volume_usd: Some(2500.0),
            ..metrics
        };
        assert_eq!(FormattedMetrics::from_metrics(&tracked).volume_change, "+12.00%");
    }
}
