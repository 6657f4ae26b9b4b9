//! Wallet asset registration (`wallet_watchAsset`)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::LinkBuilder;
use crate::domain::token::TokenMetrics;
use crate::shared::errors::WalletError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchAssetOptions {
    pub address: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    pub image: String,
}

/// Payload asking a wallet to track a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchAssetRequest {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub options: WatchAssetOptions,
}

impl WatchAssetRequest {
    pub fn erc20(address: &str, symbol: &str, decimals: Option<u8>, image: String) -> Self {
        Self {
            asset_type: "ERC20".to_string(),
            options: WatchAssetOptions {
                address: address.to_string(),
                symbol: symbol.to_string(),
                decimals,
                image,
            },
        }
    }

    pub fn for_token(address: &str, metrics: &TokenMetrics, links: &LinkBuilder) -> Self {
        Self::erc20(
            address,
            metrics.symbol_or_empty(),
            metrics.decimals,
            links.logo_url(address),
        )
    }
}

/// A browser-style wallet able to register assets
#[async_trait]
pub trait WalletExtension: Send + Sync {
    /// `Ok(true)` when the wallet added the asset, `Ok(false)` when it declined quietly
    async fn watch_asset(&self, request: &WatchAssetRequest) -> Result<bool, WalletError>;
}

/// Handle to an in-flight registration. Dropping it does not cancel the task.
pub struct WalletTask {
    handle: JoinHandle<()>,
}

impl WalletTask {
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait for the task to end, whatever its outcome
    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            if e.is_cancelled() {
                debug!("Wallet registration cancelled");
            } else {
                warn!("Wallet registration task failed: {}", e);
            }
        }
    }
}

/// Spawn the registration. Failures are logged and never reach the caller.
pub fn register_token(
    wallet: Option<Arc<dyn WalletExtension>>,
    request: WatchAssetRequest,
) -> WalletTask {
    let handle = tokio::spawn(async move {
        let wallet = match wallet {
            Some(wallet) => wallet,
            None => {
                warn!("{}", WalletError::ExtensionUnavailable);
                return;
            }
        };

        match wallet.watch_asset(&request).await {
            Ok(true) => info!(
                "Registered {} ({}) with wallet",
                request.options.symbol, request.options.address
            ),
            Ok(false) => info!("Wallet declined {}", request.options.symbol),
            Err(e) => warn!("Failed to register {} with wallet: {}", request.options.symbol, e),
        }
    });

    WalletTask { handle }
}
