use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::shared::errors::AppError;

/// Block explorer used for address and transaction links
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub url: String,
    pub name: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            url: "https://etherscan.io".to_string(),
            name: "Etherscan".to_string(),
        }
    }
}

/// Exchange front-end that receives trade and liquidity links
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    pub app_url: String,
    pub wrapped_native: String,
    pub native_symbol: String,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            app_url: "https://app.uniswap.org/#".to_string(),
            wrapped_native: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(), // WETH
            native_symbol: "ETH".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub logo_base_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            logo_base_url: "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/assets"
                .to_string(),
        }
    }
}

/// Wallet JSON-RPC endpoint; no endpoint means no wallet extension
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub rpc_url: Option<String>,
    pub timeout_ms: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            timeout_ms: 30000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub snapshot_path: String,
    pub preferences_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            snapshot_path: "data/snapshot.json".to_string(),
            preferences_path: "data/preferences.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub default_width: u32,
    pub pairs_limit: usize,
    pub transactions_limit: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_width: 1280,
            pairs_limit: 10,
            transactions_limit: 10,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub explorer: ExplorerConfig,
    pub exchange: ExchangeConfig,
    pub assets: AssetsConfig,
    pub wallet: WalletConfig,
    pub data: DataConfig,
    pub page: PageConfig,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<AppConfig, AppError> {
        let config_content = fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file: {}", e)))?;

        Self::parse(&config_content)
    }

    /// Load Config.toml from the working directory, falling back to defaults
    pub fn load_config() -> Result<AppConfig, AppError> {
        if Path::new("Config.toml").exists() {
            Self::load_from("Config.toml")
        } else {
            debug!("Config.toml not found, using defaults");
            Ok(AppConfig::default())
        }
    }

    pub fn parse(content: &str) -> Result<AppConfig, AppError> {
        toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))
    }
}
