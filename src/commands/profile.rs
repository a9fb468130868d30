//! `/profil` and the favorite button.

use super::{CommandContext, Reply};
use crate::i18n::t;
use crate::render;
use animebot_core::{catalog::Lookup, error::AnimeBotError};
use animebot_memory::FavoriteOutcome;

pub(crate) async fn show(ctx: &CommandContext<'_>) -> Result<Reply, AnimeBotError> {
    let lists = ctx.store.lists(ctx.sender_id).await?;
    Ok(Reply::text(render::profile(lists.as_ref(), ctx.lang)))
}

/// Add an anime to the sender's favorites.
///
/// Buttons carry only the id, so the title is fetched again here. Older
/// buttons that still embed the title skip the lookup.
pub(crate) async fn add_favorite(
    ctx: &CommandContext<'_>,
    id: u64,
    title: Option<String>,
) -> Result<Reply, AnimeBotError> {
    let lang = ctx.lang;
    let title = match title {
        Some(title) => title,
        None => match ctx.catalog.anime(id).await {
            Lookup::Found(anime) => render::anime_title(&anime, lang).to_string(),
            Lookup::NotFound => return Ok(Reply::Toast(t("anime_not_found", lang).into())),
            Lookup::Failed(_) => return Ok(Reply::Toast(t("fav_failed", lang).into())),
        },
    };

    let key = match ctx.store.add_favorite(ctx.sender_id, &title).await? {
        FavoriteOutcome::Added => "fav_added",
        FavoriteOutcome::AlreadyPresent => "fav_exists",
    };
    Ok(Reply::Toast(t(key, lang).to_string()))
}
