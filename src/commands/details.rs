//! Anime detail views reached from the card buttons.

use super::{CommandContext, Reply};
use crate::i18n::{self, t};
use crate::render::{self, escape_md};
use animebot_catalog::translate_or_original;
use animebot_core::{
    catalog::{Anime, Lookup},
    message::{Button, OutgoingMessage},
};

/// Characters listed under "characters" before the rest is cut.
const CHARACTER_LIMIT: usize = 10;

/// Render the full card, translating the studio list first.
pub(crate) async fn card(ctx: &CommandContext<'_>, anime: &Anime) -> Reply {
    let studios = anime.studio_names();
    let studio_text = if studios.is_empty() {
        None
    } else {
        Some(translate_or_original(ctx.translator, &studios.join(", ")).await)
    };
    Reply::Send(render::anime_card(anime, studio_text.as_deref(), ctx.lang).into_message())
}

/// Fetch one anime, mapping misses and failures to the given messages.
async fn fetch(ctx: &CommandContext<'_>, id: u64, failed_key: &str) -> Result<Anime, Reply> {
    match ctx.catalog.anime(id).await {
        Lookup::Found(anime) => Ok(anime),
        Lookup::NotFound => Err(Reply::text(t("anime_not_found", ctx.lang))),
        Lookup::Failed(_) => Err(Reply::text(t(failed_key, ctx.lang))),
    }
}

pub(crate) async fn anime(ctx: &CommandContext<'_>, id: u64) -> Reply {
    match fetch(ctx, id, "anime_failed").await {
        Ok(anime) => card(ctx, &anime).await,
        Err(reply) => reply,
    }
}

pub(crate) async fn synopsis(ctx: &CommandContext<'_>, id: u64) -> Reply {
    let lang = ctx.lang;
    let anime = match fetch(ctx, id, "synopsis_failed").await {
        Ok(anime) => anime,
        Err(reply) => return reply,
    };

    let raw = anime.synopsis.as_deref().unwrap_or_default();
    let synopsis = translate_or_original(ctx.translator, raw).await;
    let body = if synopsis.is_empty() {
        t("no_synopsis", lang).to_string()
    } else {
        escape_md(&synopsis)
    };
    let title = escape_md(render::anime_title(&anime, lang));
    Reply::text(format!("{}\n\n{body}", i18n::synopsis_header(lang, &title)))
}

pub(crate) async fn trailer(ctx: &CommandContext<'_>, id: u64) -> Reply {
    let lang = ctx.lang;
    let anime = match fetch(ctx, id, "trailer_failed").await {
        Ok(anime) => anime,
        Err(reply) => return reply,
    };
    match anime.trailer_url() {
        Some(url) => Reply::Send(
            OutgoingMessage::text(i18n::trailer_link(lang, url))
                .with_keyboard(vec![vec![Button::url(t("btn_trailer_link", lang), url)]]),
        ),
        None => Reply::text(t("no_trailer", lang)),
    }
}

pub(crate) async fn characters(ctx: &CommandContext<'_>, id: u64) -> Reply {
    let lang = ctx.lang;
    match ctx.catalog.anime_characters(id).await {
        Lookup::Found(roles) => {
            Reply::Send(render::character_list(&roles, CHARACTER_LIMIT, lang).into_message())
        }
        Lookup::NotFound => Reply::text(t("characters_empty", lang)),
        Lookup::Failed(_) => Reply::text(t("characters_failed", lang)),
    }
}

pub(crate) async fn similar(ctx: &CommandContext<'_>, id: u64) -> Reply {
    let lang = ctx.lang;
    match ctx.catalog.recommendations(id).await {
        Lookup::Found(recs) => Reply::Send(
            render::recommendation_list(&recs, ctx.list_limit, lang).into_message(),
        ),
        Lookup::NotFound => Reply::text(t("similar_empty", lang)),
        Lookup::Failed(_) => Reply::text(t("similar_failed", lang)),
    }
}

pub(crate) async fn streaming(ctx: &CommandContext<'_>, id: u64) -> Reply {
    let lang = ctx.lang;
    match ctx.catalog.streaming(id).await {
        Lookup::Found(links) => {
            Reply::Send(render::streaming_list(&links, lang).into_message())
        }
        Lookup::NotFound => Reply::text(t("streaming_empty", lang)),
        Lookup::Failed(_) => Reply::text(t("streaming_failed", lang)),
    }
}
