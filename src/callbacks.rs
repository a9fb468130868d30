//! Inline button payloads.
//!
//! Every payload is `<prefix>_<argument>` and stays well under Telegram's
//! 64-byte `callback_data` limit: favorites carry only the anime id and the
//! title is looked up again when the button is pressed.

use crate::commands::{self, CommandContext, Reply};
use crate::i18n::{day_name, parse_french_day};
use animebot_core::error::AnimeBotError;
use chrono::Weekday;
use std::fmt;

/// A decoded button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callback {
    Synopsis(u64),
    Trailer(u64),
    Characters(u64),
    Similar(u64),
    Streaming(u64),
    /// Show the full card of another anime.
    Anime(u64),
    /// Add to favorites. `title` is only set by older `fav_<id>_<title>` buttons.
    Favorite { id: u64, title: Option<String> },
    Day(Weekday),
    /// Back to the week overview.
    Planning,
    /// A weekday with nothing airing.
    NoRelease,
}

impl Callback {
    /// Decode a payload. Returns `None` for anything the bot never emitted.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "planing" => return Some(Self::Planning),
            "none" => return Some(Self::NoRelease),
            _ => {}
        }

        let (prefix, rest) = data.split_once('_')?;
        match prefix {
            "synopsis" => rest.parse().ok().map(Self::Synopsis),
            "trailer" => rest.parse().ok().map(Self::Trailer),
            "characters" => rest.parse().ok().map(Self::Characters),
            "similar" => rest.parse().ok().map(Self::Similar),
            "streaming" => rest.parse().ok().map(Self::Streaming),
            "anime" => rest.parse().ok().map(Self::Anime),
            "fav" => {
                // Titles may themselves contain '_': keep everything after the id.
                let (id, title) = match rest.split_once('_') {
                    Some((id, title)) => (id, Some(title)),
                    None => (rest, None),
                };
                let id = id.parse().ok()?;
                let title = title.filter(|t| !t.is_empty()).map(str::to_string);
                Some(Self::Favorite { id, title })
            }
            "day" => rest
                .parse::<Weekday>()
                .ok()
                .or_else(|| parse_french_day(rest))
                .map(Self::Day),
            _ => None,
        }
    }
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synopsis(id) => write!(f, "synopsis_{id}"),
            Self::Trailer(id) => write!(f, "trailer_{id}"),
            Self::Characters(id) => write!(f, "characters_{id}"),
            Self::Similar(id) => write!(f, "similar_{id}"),
            Self::Streaming(id) => write!(f, "streaming_{id}"),
            Self::Anime(id) => write!(f, "anime_{id}"),
            Self::Favorite { id, title: None } => write!(f, "fav_{id}"),
            Self::Favorite {
                id,
                title: Some(title),
            } => write!(f, "fav_{id}_{title}"),
            Self::Day(day) => write!(f, "day_{}", day_name(*day, "en")),
            Self::Planning => f.write_str("planing"),
            Self::NoRelease => f.write_str("none"),
        }
    }
}

/// Run the handler for a button press.
pub async fn handle(cb: Callback, ctx: &CommandContext<'_>) -> Result<Reply, AnimeBotError> {
    let lang = ctx.lang;
    Ok(match cb {
        Callback::Synopsis(id) => commands::details::synopsis(ctx, id).await,
        Callback::Trailer(id) => commands::details::trailer(ctx, id).await,
        Callback::Characters(id) => commands::details::characters(ctx, id).await,
        Callback::Similar(id) => commands::details::similar(ctx, id).await,
        Callback::Streaming(id) => commands::details::streaming(ctx, id).await,
        Callback::Anime(id) => commands::details::anime(ctx, id).await,
        Callback::Favorite { id, title } => {
            return commands::profile::add_favorite(ctx, id, title).await;
        }
        Callback::Day(day) => commands::schedule::day(ctx, day).await,
        Callback::Planning => commands::schedule::week(ctx).await.into_edit(),
        Callback::NoRelease => Reply::Toast(crate::i18n::t("no_release", lang).to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_payloads() {
        assert_eq!(Callback::parse("synopsis_269"), Some(Callback::Synopsis(269)));
        assert_eq!(Callback::parse("trailer_1"), Some(Callback::Trailer(1)));
        assert_eq!(Callback::parse("characters_5"), Some(Callback::Characters(5)));
        assert_eq!(Callback::parse("similar_5"), Some(Callback::Similar(5)));
        assert_eq!(Callback::parse("streaming_5"), Some(Callback::Streaming(5)));
        assert_eq!(Callback::parse("anime_21"), Some(Callback::Anime(21)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Callback::parse("synopsis_abc"), None);
        assert_eq!(Callback::parse("synopsis"), None);
        assert_eq!(Callback::parse("unknown_1"), None);
        assert_eq!(Callback::parse(""), None);
        assert_eq!(Callback::parse("fav_"), None);
    }

    #[test]
    fn test_parse_favorite_forms() {
        assert_eq!(
            Callback::parse("fav_269"),
            Some(Callback::Favorite {
                id: 269,
                title: None
            })
        );
        assert_eq!(
            Callback::parse("fav_269_Bleach"),
            Some(Callback::Favorite {
                id: 269,
                title: Some("Bleach".into())
            })
        );
    }

    #[test]
    fn test_legacy_favorite_keeps_underscores_in_title() {
        assert_eq!(
            Callback::parse("fav_1_Re_Zero_kara"),
            Some(Callback::Favorite {
                id: 1,
                title: Some("Re_Zero_kara".into())
            })
        );
    }

    #[test]
    fn test_parse_day_english_and_french() {
        assert_eq!(Callback::parse("day_Monday"), Some(Callback::Day(Weekday::Mon)));
        assert_eq!(Callback::parse("day_Lundi"), Some(Callback::Day(Weekday::Mon)));
        assert_eq!(Callback::parse("day_Dimanche"), Some(Callback::Day(Weekday::Sun)));
        assert_eq!(Callback::parse("day_Someday"), None);
    }

    #[test]
    fn test_parse_bare_payloads() {
        assert_eq!(Callback::parse("planing"), Some(Callback::Planning));
        assert_eq!(Callback::parse("none"), Some(Callback::NoRelease));
    }

    #[test]
    fn test_encoded_payloads_parse_back() {
        let all = [
            Callback::Synopsis(1),
            Callback::Favorite { id: 42, title: None },
            Callback::Day(Weekday::Fri),
            Callback::Planning,
            Callback::NoRelease,
        ];
        for cb in all {
            assert_eq!(Callback::parse(&cb.to_string()), Some(cb));
        }
    }
}
