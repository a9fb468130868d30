//! JSON-file-backed user list store.
//!
//! Split into focused submodules:
//! - `lists`: the document types and in-memory list rules
//! - `favorites`: read-modify-write operations on a user's lists
//!
//! The whole document is rewritten on every mutation. Writes go to a
//! sibling temp file that is then renamed over the target, and every
//! read-modify-write holds the store's write lock.

mod favorites;
mod lists;

#[cfg(test)]
mod tests;

pub use lists::{FavoriteOutcome, UserData, UserListState};

use animebot_core::{config::StoreConfig, error::AnimeBotError, shellexpand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Persistent user list store backed by one JSON file.
#[derive(Clone)]
pub struct Store {
    path: PathBuf,
    /// Serializes load-modify-save sequences across handlers.
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    /// Open the store from config, creating an empty document on first use.
    pub async fn new(config: &StoreConfig) -> Result<Self, AnimeBotError> {
        Self::open(shellexpand(&config.path)).await
    }

    /// Open the store at an explicit path.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AnimeBotError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AnimeBotError::Memory(format!("failed to create data dir: {e}")))?;
        }

        let store = Self {
            path,
            write_lock: Arc::new(Mutex::new(())),
        };

        if !tokio::fs::try_exists(&store.path).await.unwrap_or(false) {
            store.save(&UserData::default()).await?;
            info!("User store created at {}", store.path.display());
        } else {
            info!("User store opened at {}", store.path.display());
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full document.
    pub async fn load(&self) -> Result<UserData, AnimeBotError> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            AnimeBotError::Memory(format!("failed to read {}: {e}", self.path.display()))
        })?;
        serde_json::from_slice(&raw).map_err(|e| {
            AnimeBotError::Memory(format!("failed to parse {}: {e}", self.path.display()))
        })
    }

    /// Overwrite the full document.
    pub async fn save(&self, data: &UserData) -> Result<(), AnimeBotError> {
        let bytes = to_pretty_json(data)?;
        let tmp = self.tmp_path();

        tokio::fs::write(&tmp, &bytes).await.map_err(|e| {
            AnimeBotError::Memory(format!("failed to write {}: {e}", tmp.display()))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AnimeBotError::Memory(format!(
                "failed to move {} into place: {e}",
                tmp.display()
            ))
        })?;

        debug!("user store saved ({} users)", data.len());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Serialize with 4-space indentation.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, AnimeBotError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
