//! Page composition - turns provider data into a `TokenPageView`

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

use super::session::{PageData, PageSession, ProviderUpdate};
use super::view::{
    ActionsView, HeaderView, MetricPanel, PairRow, PanelsView, Section, TokenInfoView,
    TokenPageView, TransactionRow, WarningView,
};
use crate::domain::actions::{
    is_saved, register_token, toggle_bookmark, BookmarkOutcome, LinkBuilder, WalletExtension,
    WalletTask, WatchAssetRequest,
};
use crate::domain::format::{format_age, format_amount, format_usd, FormattedMetrics, PLACEHOLDER};
use crate::domain::layout::LayoutFlags;
use crate::domain::pair::{counterpart_token, rank_pairs, select_best_pair, PairMap};
use crate::domain::providers::{ListedTokens, PreferenceStore, TokenDataProvider};
use crate::domain::token::{TokenMetrics, TokenTransaction};
use crate::shared::config::{AppConfig, PageConfig};
use crate::shared::errors::{PreferenceError, ProviderError};
use crate::shared::types::TokenRef;
use crate::shared::utils::{shorten_address, truncate_text};

/// Name length kept in the title and the information panel
const NAME_LIMIT: usize = 16;
/// Symbol length kept in the information panel
const INFO_SYMBOL_LIMIT: usize = 12;

/// Which token page is shown, and how wide the viewport is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub address: String,
    pub path: String,
    pub width: u32,
}

impl PageContext {
    pub fn new(address: &str, width: u32) -> Self {
        Self {
            address: address.to_string(),
            path: format!("/token/{}", address),
            width,
        }
    }

    pub fn layout(&self) -> LayoutFlags {
        LayoutFlags::from_width(self.width)
    }
}

/// Preference marks relevant to one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceState {
    pub saved: bool,
    pub dismissed: bool,
    /// `None` while the curated list is unknown
    pub listed: Option<bool>,
}

/// Treat a failed lookup like one that has not loaded yet
fn loaded<T>(what: &str, address: &str, result: Result<Option<T>, ProviderError>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to load {} for {}: {}", what, address, e);
            None
        }
    }
}

pub struct PageComposer {
    data: Arc<dyn TokenDataProvider>,
    listed: Arc<dyn ListedTokens>,
    preferences: Arc<dyn PreferenceStore>,
    wallet: Option<Arc<dyn WalletExtension>>,
    links: LinkBuilder,
    page: PageConfig,
}

impl PageComposer {
    pub fn new(
        data: Arc<dyn TokenDataProvider>,
        listed: Arc<dyn ListedTokens>,
        preferences: Arc<dyn PreferenceStore>,
        config: &AppConfig,
    ) -> Self {
        Self {
            data,
            listed,
            preferences,
            wallet: None,
            links: LinkBuilder::new(config),
            page: config.page.clone(),
        }
    }

    pub fn with_wallet(mut self, wallet: Arc<dyn WalletExtension>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Fetch everything the page shows for `address`
    pub async fn load(&self, address: &str) -> PageData {
        let mut session = PageSession::new(address);

        let (metrics, pair_ids, transactions) = futures::join!(
            self.data.token_metrics(address),
            self.data.token_pairs(address),
            self.data.token_transactions(address),
        );

        if let Some(metrics) = loaded("token metrics", address, metrics) {
            session.apply(ProviderUpdate::Metrics(metrics));
        }
        if let Some(pair_ids) = loaded("token pairs", address, pair_ids) {
            let pairs = self.data.pair_data(&pair_ids).await;
            if let Some(pairs) = loaded("pair data", address, pairs) {
                session.apply(ProviderUpdate::Pairs(pairs));
            }
        }
        if let Some(transactions) = loaded("transactions", address, transactions) {
            session.apply(ProviderUpdate::Transactions(transactions));
        }

        session.into_data()
    }

    pub async fn preference_state(&self, ctx: &PageContext) -> PreferenceState {
        let saved = is_saved(self.preferences.as_ref(), &ctx.address)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to read saved tokens: {}", e);
                false
            });
        let dismissed = self
            .preferences
            .is_dismissed(&ctx.path)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to read dismissed warnings: {}", e);
                false
            });
        let listed = loaded(
            "token list",
            &ctx.address,
            self.listed.is_listed(&ctx.address).await,
        );

        PreferenceState {
            saved,
            dismissed,
            listed,
        }
    }

    pub async fn compose(&self, ctx: &PageContext) -> TokenPageView {
        let data = self.load(&ctx.address).await;
        let preferences = self.preference_state(ctx).await;
        self.build_view(ctx, &data, &preferences, Utc::now())
    }

    /// Derive the view from already loaded data; recomputes everything on each call
    pub fn build_view(
        &self,
        ctx: &PageContext,
        data: &PageData,
        preferences: &PreferenceState,
        now: DateTime<Utc>,
    ) -> TokenPageView {
        let layout = ctx.layout();
        let address = ctx.address.as_str();
        let metrics = &data.metrics;
        let formatted = FormattedMetrics::from_metrics(metrics);

        let symbol = metrics.symbol_or_empty();
        let display_symbol = layout.display_symbol(symbol);

        let best = select_best_pair(data.pairs.as_ref());
        let counterpart = best.and_then(|pair| counterpart_token(address, pair));
        debug!(
            "Best pair for {}: {:?}, counterpart {:?}",
            address,
            best.map(|p| p.id.as_str()),
            counterpart
        );

        let explorer_link = self.links.explorer_address_link(address);

        let header = HeaderView {
            symbol: symbol.to_string(),
            short_address: shorten_address(address),
            explorer_link: explorer_link.clone(),
            title: title(metrics.name_or_empty(), &display_symbol),
            price: layout.price_in_header().then(|| formatted.price.clone()),
            price_change: layout.price_in_header().then(|| formatted.price_change.clone()),
            show_search: layout.show_search(),
        };

        let unlisted = preferences.listed == Some(false);
        let warning = (unlisted && !preferences.dismissed).then(|| WarningView {
            address: address.to_string(),
            path: ctx.path.clone(),
        });

        let actions = ActionsView {
            bookmark: layout.bookmark_control(preferences.saved),
            add_liquidity_link: self.links.pool_link(address, counterpart),
            trade_link: self.links.swap_link(address, counterpart),
            wallet_label: format!("+ Add {} to Wallet", display_symbol),
        };

        let panels = self.panels(&layout, &formatted);

        TokenPageView {
            address: address.to_string(),
            layout,
            header,
            warning,
            actions,
            panels,
            best_pair: best.map(|pair| pair.id.clone()),
            counterpart: counterpart.map(str::to_string),
            top_pairs: Section::from_option(
                data.pairs
                    .as_ref()
                    .map(|pairs| self.pair_rows(pairs, best.map(|p| p.id.as_str()))),
            ),
            transactions: Section::from_option(
                data.transactions
                    .as_ref()
                    .map(|txs| self.transaction_rows(txs, now)),
            ),
            info: TokenInfoView {
                symbol: truncate_text(symbol, INFO_SYMBOL_LIMIT),
                name: truncate_text(metrics.name_or_empty(), NAME_LIMIT),
                short_address: shorten_address(address),
                copy_value: address.to_string(),
                explorer_link,
                explorer_label: self.links.explorer_label(),
            },
        }
    }

    fn panels(&self, layout: &LayoutFlags, formatted: &FormattedMetrics) -> PanelsView {
        // narrow layouts move the price out of the header into a panel, if there is one
        let price = (layout.single_column() && !formatted.price.is_empty()).then(|| MetricPanel {
            title: "Price".to_string(),
            value: formatted.price.clone(),
            change: formatted.price_change.clone(),
        });

        let volume_title = if formatted.volume.untracked {
            "Volume (24hrs) (Untracked)"
        } else {
            "Volume (24hrs)"
        };

        PanelsView {
            single_column: layout.single_column(),
            price,
            liquidity: MetricPanel {
                title: "Total Liquidity".to_string(),
                value: formatted.liquidity.clone(),
                change: formatted.liquidity_change.clone(),
            },
            volume: MetricPanel {
                title: volume_title.to_string(),
                value: formatted.volume.text.clone(),
                change: formatted.volume_change.clone(),
            },
            transactions: MetricPanel {
                title: "Transactions (24hrs)".to_string(),
                value: formatted.transactions.clone(),
                change: formatted.transactions_change.clone(),
            },
        }
    }

    fn pair_rows(&self, pairs: &PairMap, best_id: Option<&str>) -> Vec<PairRow> {
        let usd_or_placeholder =
            |value: Option<f64>| value.map(format_usd).unwrap_or_else(|| PLACEHOLDER.to_string());

        rank_pairs(pairs)
            .into_iter()
            .take(self.page.pairs_limit)
            .map(|pair| PairRow {
                id: pair.id.clone(),
                name: pair.display_name(),
                liquidity: usd_or_placeholder(pair.reserve_value()),
                volume_24h: usd_or_placeholder(pair.one_day_volume_usd),
                volume_7d: usd_or_placeholder(pair.one_week_volume_usd),
                fees_24h: usd_or_placeholder(pair.one_day_fees_usd()),
                best: Some(pair.id.as_str()) == best_id,
            })
            .collect()
    }

    fn transaction_rows(&self, transactions: &[TokenTransaction], now: DateTime<Utc>) -> Vec<TransactionRow> {
        transactions
            .iter()
            .take(self.page.transactions_limit)
            .map(|tx| TransactionRow {
                description: tx.description(),
                total_value: tx.amount_usd.map(format_usd).unwrap_or_else(|| PLACEHOLDER.to_string()),
                amount0: format!("{} {}", format_amount(tx.amount0), tx.token0.symbol),
                amount1: format!("{} {}", format_amount(tx.amount1), tx.token1.symbol),
                account: shorten_address(&tx.account),
                age: format_age(tx.timestamp, now),
                link: self.links.explorer_tx_link(&tx.hash),
            })
            .collect()
    }

    /// Save the token when the bookmark is interactive at this width
    pub async fn bookmark(&self, ctx: &PageContext) -> Result<BookmarkOutcome, PreferenceError> {
        let metrics = self.metrics_or_empty(&ctx.address).await;
        let token = TokenRef::new(ctx.address.as_str(), metrics.symbol_or_empty());
        toggle_bookmark(self.preferences.as_ref(), &token, &ctx.layout()).await
    }

    pub async fn dismiss_warning(&self, ctx: &PageContext) -> Result<(), PreferenceError> {
        self.preferences.mark_dismissed(&ctx.path).await
    }

    /// Fire-and-forget wallet registration for the page's token
    pub async fn add_to_wallet(&self, ctx: &PageContext) -> WalletTask {
        let metrics = self.metrics_or_empty(&ctx.address).await;
        let request = WatchAssetRequest::for_token(&ctx.address, &metrics, &self.links);
        register_token(self.wallet.clone(), request)
    }

    async fn metrics_or_empty(&self, address: &str) -> TokenMetrics {
        loaded("token metrics", address, self.data.token_metrics(address).await)
            .unwrap_or_else(|| TokenMetrics::empty(address))
    }
}

fn title(name: &str, display_symbol: &str) -> String {
    let name = truncate_text(name, NAME_LIMIT);
    match (name.is_empty(), display_symbol.is_empty()) {
        (true, true) => String::new(),
        (false, true) => name,
        (true, false) => format!("({})", display_symbol),
        (false, false) => format!("{} ({})", name, display_symbol),
    }
}
