//! Composed page view

use serde::Serialize;

use crate::domain::actions::BookmarkControl;
use crate::domain::layout::LayoutFlags;

/// A page section whose data may still be loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "lowercase")]
pub enum Section<T> {
    Loading,
    Ready(T),
}

impl<T> Section<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Section::Ready(v),
            None => Section::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Section::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(v) => Some(v),
            Section::Loading => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    /// Full symbol for the breadcrumb
    pub symbol: String,
    pub short_address: String,
    pub explorer_link: String,
    /// "Name (SYM)" with both parts truncated
    pub title: String,
    /// Only set on wide viewports; narrow ones show a price panel instead
    pub price: Option<String>,
    pub price_change: Option<String>,
    pub show_search: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningView {
    pub address: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionsView {
    pub bookmark: BookmarkControl,
    pub add_liquidity_link: String,
    pub trade_link: String,
    pub wallet_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricPanel {
    pub title: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelsView {
    pub single_column: bool,
    pub price: Option<MetricPanel>,
    pub liquidity: MetricPanel,
    pub volume: MetricPanel,
    pub transactions: MetricPanel,
}

impl PanelsView {
    pub fn iter(&self) -> impl Iterator<Item = &MetricPanel> {
        self.price
            .iter()
            .chain([&self.liquidity, &self.volume, &self.transactions])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairRow {
    pub id: String,
    pub name: String,
    pub liquidity: String,
    pub volume_24h: String,
    pub volume_7d: String,
    pub fees_24h: String,
    pub best: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    pub description: String,
    pub total_value: String,
    pub amount0: String,
    pub amount1: String,
    pub account: String,
    pub age: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenInfoView {
    pub symbol: String,
    pub name: String,
    pub short_address: String,
    /// Full address handed to the copy affordance
    pub copy_value: String,
    pub explorer_link: String,
    pub explorer_label: String,
}

/// Everything needed to draw the token page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPageView {
    pub address: String,
    pub layout: LayoutFlags,
    pub header: HeaderView,
    pub warning: Option<WarningView>,
    pub actions: ActionsView,
    pub panels: PanelsView,
    pub best_pair: Option<String>,
    pub counterpart: Option<String>,
    pub top_pairs: Section<Vec<PairRow>>,
    pub transactions: Section<Vec<TransactionRow>>,
    pub info: TokenInfoView,
}

impl TokenPageView {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
