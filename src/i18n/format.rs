//! Format helpers for strings with interpolation.

use super::t;
use animebot_core::catalog::Season;

/// Localized season name, capitalized.
pub fn season_name(season: Season, lang: &str) -> &'static str {
    match season {
        Season::Spring => t("season_spring", lang),
        Season::Summer => t("season_summer", lang),
        Season::Fall => t("season_fall", lang),
        Season::Winter => t("season_winter", lang),
    }
}

/// Heading of the top list.
pub fn top_header(lang: &str, count: usize) -> String {
    match lang {
        "fr" => format!("🏆 *Top {count} des Animes* :"),
        _ => format!("🏆 *Top {count} Anime*:"),
    }
}

/// Heading of a seasonal list.
pub fn season_header(lang: &str, season: Season, year: u16) -> String {
    let name = season_name(season, lang);
    match lang {
        "fr" => format!("📅 *Animes de {name} {year}* :"),
        _ => format!("📅 *{name} {year} Anime*:"),
    }
}

/// Heading of one weekday's releases.
pub fn day_header(lang: &str, day: &str) -> String {
    match lang {
        "fr" => format!("📅 *Sorties du {day}*"),
        _ => format!("📅 *{day} releases*"),
    }
}

/// Weekday with nothing airing.
pub fn day_empty(lang: &str, day: &str) -> String {
    match lang {
        "fr" => format!("📅 Aucune sortie prévue pour le {day}."),
        _ => format!("📅 Nothing airs on {day}."),
    }
}

/// Trailing line of a truncated profile list.
pub fn more_items(lang: &str, remaining: usize) -> String {
    match lang {
        "fr" => format!("... et {remaining} de plus"),
        _ => format!("... and {remaining} more"),
    }
}

pub fn synopsis_header(lang: &str, title: &str) -> String {
    match lang {
        "fr" => format!("📖 *Synopsis de {title}* :"),
        _ => format!("📖 *Synopsis of {title}*:"),
    }
}

pub fn trailer_link(lang: &str, url: &str) -> String {
    match lang {
        "fr" => format!("🎥 [Trailer officiel]({url})"),
        _ => format!("🎥 [Official trailer]({url})"),
    }
}

pub fn characters_header(lang: &str) -> &'static str {
    match lang {
        "fr" => "👥 *Personnages principaux* :",
        _ => "👥 *Main characters*:",
    }
}

pub fn similar_header(lang: &str) -> &'static str {
    match lang {
        "fr" => "🎯 *Animes similaires* :",
        _ => "🎯 *Similar anime*:",
    }
}

pub fn streaming_header(lang: &str) -> &'static str {
    match lang {
        "fr" => "🌐 *Où le regarder* :",
        _ => "🌐 *Where to watch*:",
    }
}

/// Role of a character in an anime ("Main", "Supporting").
pub fn character_role(lang: &str, role: &str) -> String {
    match (lang, role) {
        ("fr", "Main") => "Principal".to_string(),
        ("fr", "Supporting") => "Secondaire".to_string(),
        _ => role.to_string(),
    }
}
