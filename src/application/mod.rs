//! Application layer - page composition, rendering and CLI commands

pub mod commands;
pub mod composer;
pub mod renderer;
pub mod session;
pub mod view;

pub use commands::{Cli, CommandExecutor, Commands};
pub use composer::{PageComposer, PageContext, PreferenceState};
pub use renderer::ConsoleRenderer;
pub use session::{PageData, PageSession, ProviderUpdate};
pub use view::{Section, TokenPageView};
