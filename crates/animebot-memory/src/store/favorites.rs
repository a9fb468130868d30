//! Favorites and list reads.

use super::{FavoriteOutcome, Store, UserListState};
use animebot_core::error::AnimeBotError;
use tracing::info;

impl Store {
    /// Add `title` to the user's favorites.
    ///
    /// Returns [`FavoriteOutcome::AlreadyPresent`] without writing when the
    /// title is already a favorite.
    pub async fn add_favorite(
        &self,
        user_id: &str,
        title: &str,
    ) -> Result<FavoriteOutcome, AnimeBotError> {
        let _guard = self.write_lock.lock().await;

        let mut data = self.load().await?;
        let outcome = data.add_favorite(user_id, title);
        if outcome == FavoriteOutcome::Added {
            self.save(&data).await?;
            info!("user {user_id} added favorite: {title}");
        }
        Ok(outcome)
    }

    /// A user's lists, or `None` if they never saved anything.
    pub async fn lists(&self, user_id: &str) -> Result<Option<UserListState>, AnimeBotError> {
        let data = self.load().await?;
        Ok(data.get(user_id).cloned())
    }
}
