//! Metric formatting - pure value-to-string rules

mod currency;
mod metrics;
mod time;

pub use currency::{compact_number, format_amount, format_percent, format_usd, group_digits};
pub use metrics::{
    format_liquidity, format_price, format_txn_count, format_volume, FormattedMetrics,
    VolumeDisplay, PLACEHOLDER,
};
pub use time::format_age;
