//! Tokenscope - token analytics page for DEX explorers
//! Built with Domain-Driven Design principles

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types for convenience
pub use application::{ConsoleRenderer, PageComposer, PageContext, TokenPageView};
pub use domain::format::FormattedMetrics;
pub use domain::layout::LayoutFlags;
pub use domain::pair::select_best_pair;
pub use shared::config::{AppConfig, ConfigLoader};
