//! Plain-text rendering of a token page

use std::fmt::Write;

use super::view::{MetricPanel, Section, TokenPageView};
use crate::domain::actions::BookmarkControl;

const RULE_WIDTH: usize = 80;
const LOADING: &str = "Loading...";

/// Renders a `TokenPageView` for the terminal
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, view: &TokenPageView) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_page(&mut out, view);
        out
    }

    fn write_page(&self, out: &mut String, view: &TokenPageView) -> std::fmt::Result {
        let header = &view.header;

        if let Some(warning) = &view.warning {
            writeln!(out, "! Token {} is not on the default token list.", warning.address)?;
            writeln!(out, "! Anyone can create a token with any name. Always check the address.")?;
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        }

        if header.show_search {
            writeln!(out, "Tokens → {} ({})    [search]", header.symbol, header.short_address)?;
        } else {
            writeln!(out, "Tokens → {} ({})", header.symbol, header.short_address)?;
        }
        writeln!(out, "{}", header.explorer_link)?;
        writeln!(out)?;

        match (&header.price, &header.price_change) {
            (Some(price), Some(change)) if !price.is_empty() => {
                writeln!(out, "{}  {}  {}", header.title, price, change)?
            }
            _ => writeln!(out, "{}", header.title)?,
        }

        let bookmark = match view.actions.bookmark {
            BookmarkControl::Interactive => Some("[+ Save]"),
            BookmarkControl::Indicator => Some("[saved]"),
            BookmarkControl::Hidden => None,
        };
        if let Some(bookmark) = bookmark {
            write!(out, "{}  ", bookmark)?;
        }
        writeln!(out, "[Add Liquidity] {}", view.actions.add_liquidity_link)?;
        writeln!(out, "[Trade] {}", view.actions.trade_link)?;
        writeln!(out)?;

        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        for panel in view.panels.iter() {
            write_panel(out, panel, view.panels.single_column)?;
        }
        writeln!(out)?;

        writeln!(out, "Top Pairs")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        match &view.top_pairs {
            Section::Loading => writeln!(out, "  {}", LOADING)?,
            Section::Ready(rows) if rows.is_empty() => writeln!(out, "  No pairs")?,
            Section::Ready(rows) => {
                writeln!(
                    out,
                    "  {:<20} {:>14} {:>14} {:>14} {:>12}",
                    "Name", "Liquidity", "Volume (24h)", "Volume (7d)", "Fees (24h)"
                )?;
                for row in rows {
                    let marker = if row.best { "*" } else { " " };
                    writeln!(
                        out,
                        "{} {:<20} {:>14} {:>14} {:>14} {:>12}",
                        marker, row.name, row.liquidity, row.volume_24h, row.volume_7d, row.fees_24h
                    )?;
                }
            }
        }
        writeln!(out)?;

        writeln!(out, "Transactions")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        match &view.transactions {
            Section::Loading => writeln!(out, "  {}", LOADING)?,
            Section::Ready(rows) if rows.is_empty() => writeln!(out, "  No transactions")?,
            Section::Ready(rows) => {
                for row in rows {
                    writeln!(
                        out,
                        "  {:<28} {:>12}  {} / {}  {}  {}",
                        row.description, row.total_value, row.amount0, row.amount1, row.account, row.age
                    )?;
                }
            }
        }
        writeln!(out)?;

        let info = &view.info;
        writeln!(out, "Token Information")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(out, "  Symbol:  {}", info.symbol)?;
        writeln!(out, "  Name:    {}", info.name)?;
        writeln!(out, "  Address: {} [copy {}]", info.short_address, info.copy_value)?;
        writeln!(out, "  {}: {}", info.explorer_label, info.explorer_link)?;
        writeln!(out, "  {}", view.actions.wallet_label)?;

        Ok(())
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn write_panel(out: &mut String, panel: &MetricPanel, single_column: bool) -> std::fmt::Result {
    if single_column {
        writeln!(out, "{}", panel.title)?;
        writeln!(out, "  {}  {}", panel.value, panel.change)
    } else {
        writeln!(out, "{:<28} {:>16}  {}", panel.title, panel.value, panel.change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view::{
        ActionsView, HeaderView, PairRow, PanelsView, TokenInfoView, WarningView,
    };
    use crate::domain::layout::LayoutFlags;

    fn panel(title: &str, value: &str) -> MetricPanel {
        MetricPanel {
            title: title.to_string(),
            value: value.to_string(),
            change: "+1.00%".to_string(),
        }
    }

    fn page(width: u32) -> TokenPageView {
        let layout = LayoutFlags::from_width(width);
        TokenPageView {
            address: "0xabc".to_string(),
            layout,
            header: HeaderView {
                symbol: "UNI".to_string(),
                short_address: "0xabc".to_string(),
                explorer_link: "https://etherscan.io/address/0xabc".to_string(),
                title: "Uniswap (UNI)".to_string(),
                price: layout.price_in_header().then(|| "$5.12".to_string()),
                price_change: layout.price_in_header().then(|| "+2.50%".to_string()),
                show_search: layout.show_search(),
            },
            warning: None,
            actions: ActionsView {
                bookmark: layout.bookmark_control(false),
                add_liquidity_link: "https://app/add".to_string(),
                trade_link: "https://app/swap".to_string(),
                wallet_label: "+ Add UNI to Wallet".to_string(),
            },
            panels: PanelsView {
                single_column: layout.single_column(),
                price: layout.single_column().then(|| panel("Price", "$5.12")),
                liquidity: panel("Total Liquidity", "$1,000,000"),
                volume: panel("Volume (24hrs)", "$20,000"),
                transactions: panel("Transactions (24hrs)", "12"),
            },
            best_pair: None,
            counterpart: None,
            top_pairs: Section::Loading,
            transactions: Section::Loading,
            info: TokenInfoView {
                symbol: "UNI".to_string(),
                name: "Uniswap".to_string(),
                short_address: "0xabc".to_string(),
                copy_value: "0xabc".to_string(),
                explorer_link: "https://etherscan.io/address/0xabc".to_string(),
                explorer_label: "View on Etherscan".to_string(),
            },
        }
    }

    #[test]
    fn test_wide_render() {
        let text = ConsoleRenderer::new().render(&page(1440));

        assert!(text.contains("Uniswap (UNI)  $5.12  +2.50%"));
        assert!(text.contains("[search]"));
        assert!(text.contains("[+ Save]"));
        assert!(!text.contains("\nPrice\n"));
        assert_eq!(text.matches(LOADING).count(), 2);
        assert!(text.contains("+ Add UNI to Wallet"));
    }

    #[test]
    fn test_narrow_render() {
        let text = ConsoleRenderer::new().render(&page(480));

        assert!(!text.contains("[search]"));
        assert!(!text.contains("[+ Save]"));
        assert!(!text.contains("[saved]"));
        assert!(text.contains("\nPrice\n  $5.12  +1.00%"));
    }

    #[test]
    fn test_sections_and_warning() {
        let mut view = page(1440);
        view.warning = Some(WarningView {
            address: "0xabc".to_string(),
            path: "/token/0xabc".to_string(),
        });
        view.top_pairs = Section::Ready(vec![PairRow {
            id: "0xpair".to_string(),
            name: "UNI-WETH".to_string(),
            liquidity: "$9,000,000".to_string(),
            volume_24h: "$20,000".to_string(),
            volume_7d: "-".to_string(),
            fees_24h: "$60.00".to_string(),
            best: true,
        }]);
        view.transactions = Section::Ready(Vec::new());

        let text = ConsoleRenderer::new().render(&view);
        assert!(text.starts_with("! Token 0xabc is not on the default token list."));
        assert!(text.contains("* UNI-WETH"));
        assert!(text.contains("No transactions"));
        assert!(!text.contains(LOADING));
    }
}
