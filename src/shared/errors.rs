//! Error handling for the application

use thiserror::Error;

/// Data provider errors
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Snapshot unavailable: {0}")]
    SnapshotUnavailable(String),

    #[error("Invalid snapshot data: {0}")]
    InvalidData(String),

    #[error("Lookup failed: {0}")]
    LookupFailed(String),
}

/// Wallet extension errors
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    #[error("Wallet extension not available")]
    ExtensionUnavailable,

    #[error("Request rejected by user: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid wallet response: {0}")]
    InvalidResponse(String),
}

/// Preference store errors
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Preference storage error: {0}")]
    StorageError(String),

    #[error("Invalid preference data: {0}")]
    InvalidData(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid token address: {0}")]
    InvalidAddress(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Preference error: {0}")]
    PreferenceError(String),

    #[error("Wallet error: {0}")]
    WalletError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::ProviderError(err.to_string())
    }
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        AppError::WalletError(err.to_string())
    }
}

impl From<PreferenceError> for AppError {
    fn from(err: PreferenceError) -> Self {
        AppError::PreferenceError(err.to_string())
    }
}
