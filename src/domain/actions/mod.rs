//! User actions - bookmark, external links and wallet registration

mod bookmark;
mod links;
mod wallet;

pub use bookmark::{is_saved, toggle_bookmark, BookmarkControl, BookmarkOutcome};
pub use links::LinkBuilder;
pub use wallet::{register_token, WalletExtension, WalletTask, WatchAssetOptions, WatchAssetRequest};
