//! Infrastructure - concrete data, preference and wallet adapters

mod preferences;
mod snapshot_provider;
mod wallet_rpc;

pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceMarks};
pub use snapshot_provider::{Snapshot, SnapshotProvider};
pub use wallet_rpc::JsonRpcWallet;
