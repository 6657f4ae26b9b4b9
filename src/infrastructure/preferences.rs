//! Preference store implementations

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::providers::PreferenceStore;
use crate::shared::errors::PreferenceError;
use crate::shared::utils::normalize_address;

/// Persisted preference marks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceMarks {
    /// Lowercased address -> symbol
    pub saved_tokens: BTreeMap<String, String>,
    pub dismissed_paths: BTreeSet<String>,
}

/// In-process preference store
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    marks: RwLock<PreferenceMarks>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marks(marks: PreferenceMarks) -> Self {
        Self {
            marks: RwLock::new(marks),
        }
    }

    pub async fn marks(&self) -> PreferenceMarks {
        self.marks.read().await.clone()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn saved_tokens(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        Ok(self.marks.read().await.saved_tokens.clone())
    }

    async fn add_saved_token(&self, address: &str, symbol: &str) -> Result<(), PreferenceError> {
        self.marks
            .write()
            .await
            .saved_tokens
            .insert(normalize_address(address), symbol.to_string());
        Ok(())
    }

    async fn is_dismissed(&self, path: &str) -> Result<bool, PreferenceError> {
        Ok(self.marks.read().await.dismissed_paths.contains(path))
    }

    async fn mark_dismissed(&self, path: &str) -> Result<(), PreferenceError> {
        self.marks.write().await.dismissed_paths.insert(path.to_string());
        Ok(())
    }
}

/// Preference store persisted as a JSON file after every change
pub struct FilePreferenceStore {
    path: PathBuf,
    inner: MemoryPreferenceStore,
}

impl FilePreferenceStore {
    /// Open the store; a missing file starts empty
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();

        let marks = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| PreferenceError::InvalidData(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No preferences at {}, starting empty", path.display());
                PreferenceMarks::default()
            }
            Err(e) => {
                return Err(PreferenceError::StorageError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(Self {
            path,
            inner: MemoryPreferenceStore::with_marks(marks),
        })
    }

    async fn persist(&self) -> Result<(), PreferenceError> {
        let marks = self.inner.marks().await;
        let content = serde_json::to_string_pretty(&marks)
            .map_err(|e| PreferenceError::InvalidData(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PreferenceError::StorageError(e.to_string()))?;
        }
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| PreferenceError::StorageError(format!("Failed to write {}: {}", self.path.display(), e)))?;

        info!("Preferences saved to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn saved_tokens(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        self.inner.saved_tokens().await
    }

    async fn add_saved_token(&self, address: &str, symbol: &str) -> Result<(), PreferenceError> {
        self.inner.add_saved_token(address, symbol).await?;
        self.persist().await
    }

    async fn is_dismissed(&self, path: &str) -> Result<bool, PreferenceError> {
        self.inner.is_dismissed(path).await
    }

    async fn mark_dismissed(&self, path: &str) -> Result<(), PreferenceError> {
        self.inner.mark_dismissed(path).await?;
        self.persist().await
    }
}
