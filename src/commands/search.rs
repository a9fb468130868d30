//! `/anime`, `/recherche` and `/personnage`.

use super::{details, CommandContext, Reply};
use crate::i18n::t;
use crate::render;
use animebot_catalog::translate_or_original;
use animebot_core::catalog::Lookup;

/// First anime matching `query`, as a card.
pub(super) async fn anime(ctx: &CommandContext<'_>, query: &str) -> Reply {
    let lang = ctx.lang;
    if query.is_empty() {
        return Reply::text(t("search_usage", lang));
    }
    match ctx.catalog.search_anime(query).await {
        Lookup::Found(anime) => details::card(ctx, &anime).await,
        Lookup::NotFound => Reply::text(t("no_anime_found", lang)),
        Lookup::Failed(_) => Reply::text(t("search_failed", lang)),
    }
}

/// First character matching `query`, with a translated description.
pub(super) async fn character(ctx: &CommandContext<'_>, query: &str) -> Reply {
    let lang = ctx.lang;
    if query.is_empty() {
        return Reply::text(t("character_usage", lang));
    }
    match ctx.catalog.search_character(query).await {
        Lookup::Found(character) => {
            let about = character.about.as_deref().unwrap_or_default();
            let about = translate_or_original(ctx.translator, about).await;
            Reply::Send(render::character_card(&character, &about, lang).into_message())
        }
        Lookup::NotFound => Reply::text(t("no_character_found", lang)),
        Lookup::Failed(_) => Reply::text(t("character_failed", lang)),
    }
}
