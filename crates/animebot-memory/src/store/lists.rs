//! The stored document: user id → list state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of adding a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    AlreadyPresent,
}

/// One user's lists. Always serialized with all five keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListState {
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub watchlist: Vec<String>,
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(default)]
    pub dropped: Vec<String>,
    /// Named user lists. Reserved: nothing writes here yet.
    #[serde(default)]
    pub custom_lists: BTreeMap<String, Vec<String>>,
}

/// The whole store document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserData {
    users: BTreeMap<String, UserListState>,
}

impl UserData {
    pub fn get(&self, user_id: &str) -> Option<&UserListState> {
        self.users.get(user_id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Append `title` to the user's favorites unless it is already there.
    ///
    /// Creates the user's entry (with all lists empty) on first use.
    pub fn add_favorite(&mut self, user_id: &str, title: &str) -> FavoriteOutcome {
        let lists = self.users.entry(user_id.to_string()).or_default();
        if lists.favorites.iter().any(|f| f == title) {
            return FavoriteOutcome::AlreadyPresent;
        }
        lists.favorites.push(title.to_string());
        FavoriteOutcome::Added
    }
}
