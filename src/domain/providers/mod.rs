//! Provider interfaces - everything the page reads from outside

mod data_provider;
mod preference_store;

pub use data_provider::{ListedTokens, TokenDataProvider};
pub use preference_store::PreferenceStore;
