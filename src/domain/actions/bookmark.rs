//! Bookmark (saved token) action

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::layout::LayoutFlags;
use crate::domain::providers::PreferenceStore;
use crate::shared::errors::PreferenceError;
use crate::shared::types::TokenRef;
use crate::shared::utils::same_address;

/// How the bookmark affordance is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookmarkControl {
    /// Clickable, saves the token
    Interactive,
    /// Dimmed, decorative icon
    Indicator,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkOutcome {
    Saved,
    /// Nothing happened; the control was not interactive
    Unavailable(BookmarkControl),
}

pub async fn is_saved(store: &dyn PreferenceStore, address: &str) -> Result<bool, PreferenceError> {
    let saved = store.saved_tokens().await?;
    Ok(saved.keys().any(|saved_address| same_address(saved_address, address)))
}

/// Save the token if the bookmark is interactive for this viewport
pub async fn toggle_bookmark(
    store: &dyn PreferenceStore,
    token: &TokenRef,
    flags: &LayoutFlags,
) -> Result<BookmarkOutcome, PreferenceError> {
    let already_saved = is_saved(store, &token.id).await?;

    match flags.bookmark_control(already_saved) {
        BookmarkControl::Interactive => {
            store.add_saved_token(&token.id, &token.symbol).await?;
            info!("Saved token {} ({})", token.symbol, token.id);
            Ok(BookmarkOutcome::Saved)
        }
        control => {
            debug!("Bookmark not interactive for {}: {:?}", token.id, control);
            Ok(BookmarkOutcome::Unavailable(control))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryPreferenceStore;

    const UNI: &str = "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984";

    #[tokio::test]
    async fn test_bookmark_saves_once() {
        let store = MemoryPreferenceStore::new();
        let token = TokenRef::new(UNI, "UNI");
        let flags = LayoutFlags::from_width(1440);

        let first = toggle_bookmark(&store, &token, &flags).await.unwrap();
        assert_eq!(first, BookmarkOutcome::Saved);
        assert!(is_saved(&store, &UNI.to_uppercase().replace("0X", "0x")).await.unwrap());

        let second = toggle_bookmark(&store, &token, &flags).await.unwrap();
        assert_eq!(second, BookmarkOutcome::Unavailable(BookmarkControl::Indicator));
        assert_eq!(store.saved_tokens().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bookmark_disabled_on_narrow_viewport() {
        let store = MemoryPreferenceStore::new();
        let token = TokenRef::new(UNI, "UNI");

        let outcome = toggle_bookmark(&store, &token, &LayoutFlags::from_width(640)).await.unwrap();
        assert_eq!(outcome, BookmarkOutcome::Unavailable(BookmarkControl::Hidden));
        assert!(store.saved_tokens().await.unwrap().is_empty());
    }
}
