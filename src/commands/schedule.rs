//! `/planing`: this week's releases, one button per day.

use super::{CommandContext, Reply};
use crate::i18n::t;
use crate::render;
use animebot_core::{catalog::Lookup, message::OutgoingMessage};
use chrono::Weekday;

/// The week overview. An empty schedule still shows every day (all inert).
pub(crate) async fn week(ctx: &CommandContext<'_>) -> Reply {
    let lang = ctx.lang;
    let schedule = match ctx.catalog.schedule(None).await {
        Lookup::Found(list) => list,
        Lookup::NotFound => Vec::new(),
        Lookup::Failed(_) => return Reply::text(t("schedule_failed", lang)),
    };
    Reply::Send(
        OutgoingMessage::text(t("week_header", lang))
            .with_keyboard(render::week_keyboard(&schedule, lang)),
    )
}

/// Releases of one day, shown in place of the week overview.
pub(crate) async fn day(ctx: &CommandContext<'_>, day: Weekday) -> Reply {
    let lang = ctx.lang;
    let entries = match ctx.catalog.schedule(Some(day)).await {
        Lookup::Found(list) => list,
        Lookup::NotFound => Vec::new(),
        Lookup::Failed(_) => return Reply::text(t("day_failed", lang)).into_edit(),
    };
    Reply::Edit(render::day_listing(day, &entries, lang).into_message())
}
