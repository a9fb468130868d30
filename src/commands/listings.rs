//! `/top`, `/saison` and `/random`.

use super::{details, CommandContext, Reply};
use crate::i18n::{self, t};
use crate::render;
use animebot_core::catalog::{Lookup, Season};

pub(super) async fn top(ctx: &CommandContext<'_>) -> Reply {
    let lang = ctx.lang;
    match ctx.catalog.top_anime().await {
        Lookup::Found(mut list) => {
            list.truncate(ctx.list_limit);
            let header = i18n::top_header(lang, list.len());
            Reply::Send(render::ranked_list(&header, &list, lang).into_message())
        }
        Lookup::NotFound => Reply::text(t("top_empty", lang)),
        Lookup::Failed(_) => Reply::text(t("top_failed", lang)),
    }
}

/// `/saison <year> <season>`: the first entries of that season.
pub(super) async fn season(ctx: &CommandContext<'_>, args: &str) -> Reply {
    let lang = ctx.lang;
    let mut parts = args.split_whitespace();
    let (Some(year), Some(season)) = (parts.next(), parts.next()) else {
        return Reply::text(t("season_usage", lang));
    };
    let Ok(year) = year.parse::<u16>() else {
        return Reply::text(t("season_usage", lang));
    };
    let Ok(season) = season.parse::<Season>() else {
        return Reply::text(t("season_invalid", lang));
    };

    match ctx.catalog.season(year, season).await {
        Lookup::Found(mut list) => {
            list.truncate(ctx.list_limit);
            let header = i18n::season_header(lang, season, year);
            Reply::Send(render::ranked_list(&header, &list, lang).into_message())
        }
        Lookup::NotFound => Reply::text(t("season_empty", lang)),
        Lookup::Failed(_) => Reply::text(t("season_failed", lang)),
    }
}

pub(super) async fn random(ctx: &CommandContext<'_>) -> Reply {
    match ctx.catalog.random_anime().await {
        Lookup::Found(anime) => details::card(ctx, &anime).await,
        // An empty random pick is as useless as a failed one.
        Lookup::NotFound | Lookup::Failed(_) => Reply::text(t("random_failed", ctx.lang)),
    }
}
