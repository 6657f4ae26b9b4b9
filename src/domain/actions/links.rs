//! External link construction

use crate::shared::config::AppConfig;
use crate::shared::utils::same_address;

/// Builds exchange, explorer and logo URLs for a token
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    app_url: String,
    wrapped_native: String,
    native_symbol: String,
    explorer_url: String,
    explorer_name: String,
    logo_base_url: String,
}

impl LinkBuilder {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            app_url: config.exchange.app_url.trim_end_matches('/').to_string(),
            wrapped_native: config.exchange.wrapped_native.clone(),
            native_symbol: config.exchange.native_symbol.clone(),
            explorer_url: config.explorer.url.trim_end_matches('/').to_string(),
            explorer_name: config.explorer.name.clone(),
            logo_base_url: config.assets.logo_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The exchange expects the native symbol in place of the wrapped token
    fn currency_param<'a>(&'a self, address: &'a str) -> &'a str {
        if same_address(address, &self.wrapped_native) {
            &self.native_symbol
        } else {
            address
        }
    }

    /// Add-liquidity URL; pairs with the native currency when no counterpart is known
    pub fn pool_link(&self, token: &str, counterpart: Option<&str>) -> String {
        let other = match counterpart {
            Some(address) => self.currency_param(address),
            None => self.native_symbol.as_str(),
        };
        format!("{}/add/v2/{}/{}", self.app_url, self.currency_param(token), other)
    }

    /// Swap URL; single-token variant when no counterpart is known
    pub fn swap_link(&self, token: &str, counterpart: Option<&str>) -> String {
        match counterpart {
            Some(address) => format!(
                "{}/swap?inputCurrency={}&outputCurrency={}",
                self.app_url,
                self.currency_param(token),
                self.currency_param(address)
            ),
            None => format!("{}/swap?inputCurrency={}", self.app_url, token),
        }
    }

    pub fn explorer_address_link(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_url, address)
    }

    pub fn explorer_tx_link(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, hash)
    }

    pub fn explorer_label(&self) -> String {
        format!("View on {}", self.explorer_name)
    }

    pub fn logo_url(&self, address: &str) -> String {
        format!("{}/{}/logo.png", self.logo_base_url, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNI: &str = "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984";
    const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

    fn builder() -> LinkBuilder {
        LinkBuilder::new(&AppConfig::default())
    }

    #[test]
    fn test_swap_link_with_counterpart() {
        assert_eq!(
            builder().swap_link(UNI, Some(WETH)),
            format!("https://app.uniswap.org/#/swap?inputCurrency={}&outputCurrency=ETH", UNI)
        );
    }

    #[test]
    fn test_swap_link_single_token() {
        assert_eq!(
            builder().swap_link(UNI, None),
            format!("https://app.uniswap.org/#/swap?inputCurrency={}", UNI)
        );
    }

    #[test]
    fn test_pool_link() {
        let links = builder();
        assert_eq!(
            links.pool_link(UNI, None),
            format!("https://app.uniswap.org/#/add/v2/{}/ETH", UNI)
        );
        assert_eq!(links.pool_link(WETH, Some(UNI)), format!("https://app.uniswap.org/#/add/v2/ETH/{}", UNI));
    }

    #[test]
    fn test_explorer_links() {
        let links = builder();
        assert_eq!(links.explorer_address_link(UNI), format!("https://etherscan.io/address/{}", UNI));
        assert_eq!(links.explorer_tx_link("0xabc"), "https://etherscan.io/tx/0xabc");
        assert_eq!(links.explorer_label(), "View on Etherscan");
        assert!(links.logo_url(UNI).ends_with(&format!("/{}/logo.png", UNI)));
    }
}
