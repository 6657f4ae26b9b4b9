//! CLI commands and handlers
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::composer::{PageComposer, PageContext};
use super::renderer::ConsoleRenderer;
use crate::domain::actions::BookmarkOutcome;
use crate::infrastructure::{FilePreferenceStore, JsonRpcWallet, SnapshotProvider};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppError;
use crate::shared::utils::{is_valid_address, normalize_address};

#[derive(Parser)]
#[command(name = "tokenscope")]
#[command(version, about = "Token analytics page for DEX explorers")]
pub struct Cli {
    /// Path to config file (defaults to ./Config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the page data comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Snapshot file with tokens, pairs and transactions (overrides config)
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Preferences file (overrides config)
    #[arg(long)]
    pub preferences: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose and print the page for a token
    Page {
        /// Token address
        token: String,

        /// Viewport width in pixels (overrides config)
        #[arg(short, long)]
        width: Option<u32>,

        /// Print the composed view as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Save a token to the bookmarked list
    Bookmark {
        /// Token address
        token: String,

        /// Viewport width in pixels (overrides config)
        #[arg(short, long)]
        width: Option<u32>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Dismiss the unlisted-token warning for a token page
    Dismiss {
        /// Token address
        token: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Ask a wallet to track the token
    AddToWallet {
        /// Token address
        token: String,

        /// Wallet JSON-RPC endpoint (overrides config)
        #[arg(long)]
        wallet_rpc: Option<String>,

        #[command(flatten)]
        source: SourceArgs,
    },
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command
    pub async fn execute(command: Commands, config: AppConfig) -> Result<()> {
        match command {
            Commands::Page {
                token,
                width,
                json,
                source,
            } => Self::execute_page_command(&token, width, json, source, config).await,
            Commands::Bookmark {
                token,
                width,
                source,
            } => Self::execute_bookmark_command(&token, width, source, config).await,
            Commands::Dismiss { token, source } => {
                Self::execute_dismiss_command(&token, source, config).await
            }
            Commands::AddToWallet {
                token,
                wallet_rpc,
                source,
            } => Self::execute_wallet_command(&token, wallet_rpc, source, config).await,
        }
    }

    async fn execute_page_command(
        token: &str,
        width: Option<u32>,
        json: bool,
        source: SourceArgs,
        config: AppConfig,
    ) -> Result<()> {
        let ctx = Self::context(token, width, &config)?;
        let composer = Self::build_composer(source, &config).await?;

        let view = composer.compose(&ctx).await;
        if json {
            println!("{}", view.to_json().context("Failed to serialize page view")?);
        } else {
            print!("{}", ConsoleRenderer::new().render(&view));
        }
        Ok(())
    }

    async fn execute_bookmark_command(
        token: &str,
        width: Option<u32>,
        source: SourceArgs,
        config: AppConfig,
    ) -> Result<()> {
        let ctx = Self::context(token, width, &config)?;
        let composer = Self::build_composer(source, &config).await?;

        match composer.bookmark(&ctx).await.map_err(AppError::from)? {
            BookmarkOutcome::Saved => info!("✅ Token {} saved", ctx.address),
            BookmarkOutcome::Unavailable(control) => {
                warn!("Bookmark is {:?} at width {}, nothing saved", control, ctx.width)
            }
        }
        Ok(())
    }

    async fn execute_dismiss_command(token: &str, source: SourceArgs, config: AppConfig) -> Result<()> {
        let ctx = Self::context(token, None, &config)?;
        let composer = Self::build_composer(source, &config).await?;

        composer.dismiss_warning(&ctx).await.map_err(AppError::from)?;
        info!("Warning dismissed for {}", ctx.path);
        Ok(())
    }

    async fn execute_wallet_command(
        token: &str,
        wallet_rpc: Option<String>,
        source: SourceArgs,
        config: AppConfig,
    ) -> Result<()> {
        let ctx = Self::context(token, None, &config)?;
        let mut composer = Self::build_composer(source, &config).await?;

        match wallet_rpc.or_else(|| config.wallet.rpc_url.clone()) {
            Some(url) => {
                let wallet = JsonRpcWallet::new(url, Duration::from_millis(config.wallet.timeout_ms))
                    .map_err(AppError::from)?;
                composer = composer.with_wallet(Arc::new(wallet));
            }
            None => warn!("No wallet endpoint configured"),
        }

        composer.add_to_wallet(&ctx).await.wait().await;
        Ok(())
    }

    fn context(token: &str, width: Option<u32>, config: &AppConfig) -> Result<PageContext> {
        if !is_valid_address(token) {
            bail!(AppError::InvalidAddress(token.to_string()));
        }
        let width = width.unwrap_or(config.page.default_width);
        Ok(PageContext::new(&normalize_address(token), width))
    }

    async fn build_composer(source: SourceArgs, config: &AppConfig) -> Result<PageComposer> {
        let snapshot_path = source.snapshot.unwrap_or_else(|| config.data.snapshot_path.clone());
        let preferences_path = source
            .preferences
            .unwrap_or_else(|| config.data.preferences_path.clone());

        let provider = Arc::new(
            SnapshotProvider::from_file(&snapshot_path)
                .await
                .map_err(AppError::from)
                .with_context(|| format!("Failed to load snapshot {}", snapshot_path))?,
        );
        let preferences = Arc::new(
            FilePreferenceStore::open(&preferences_path)
                .await
                .map_err(AppError::from)
                .with_context(|| format!("Failed to open preferences {}", preferences_path))?,
        );

        Ok(PageComposer::new(provider.clone(), provider, preferences, config))
    }
}
