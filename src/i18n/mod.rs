//! Internationalization: localized strings for bot replies.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! `format_*()` helpers for strings with interpolation.
//! Supported languages: French (`fr`) and English (`en`, fallback).

mod format;
mod help;
mod labels;
mod messages;


pub use format::*;

use chrono::Weekday;

/// Return a localized static string for `key` in the given `lang`.
/// Falls back to English for unsupported languages.
pub fn t(key: &str, lang: &str) -> &'static str {
    if let Some(v) = labels::lookup(key, lang) {
        return v;
    }
    if let Some(v) = messages::lookup(key, lang) {
        return v;
    }
    if let Some(v) = help::lookup(key, lang) {
        return v;
    }
    "???"
}

/// Localized weekday name, capitalized.
pub fn day_name(day: Weekday, lang: &str) -> &'static str {
    match (lang, day) {
        ("fr", Weekday::Mon) => "Lundi",
        ("fr", Weekday::Tue) => "Mardi",
        ("fr", Weekday::Wed) => "Mercredi",
        ("fr", Weekday::Thu) => "Jeudi",
        ("fr", Weekday::Fri) => "Vendredi",
        ("fr", Weekday::Sat) => "Samedi",
        ("fr", Weekday::Sun) => "Dimanche",
        (_, Weekday::Mon) => "Monday",
        (_, Weekday::Tue) => "Tuesday",
        (_, Weekday::Wed) => "Wednesday",
        (_, Weekday::Thu) => "Thursday",
        (_, Weekday::Fri) => "Friday",
        (_, Weekday::Sat) => "Saturday",
        (_, Weekday::Sun) => "Sunday",
    }
}

/// Parse a French weekday name (as found in older button payloads).
pub fn parse_french_day(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "lundi" => Some(Weekday::Mon),
        "mardi" => Some(Weekday::Tue),
        "mercredi" => Some(Weekday::Wed),
        "jeudi" => Some(Weekday::Thu),
        "vendredi" => Some(Weekday::Fri),
        "samedi" => Some(Weekday::Sat),
        "dimanche" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Command menu entries `(command, description)` for the chat client.
pub fn command_menu(lang: &str) -> Vec<(String, String)> {
    [
        ("anime", "menu_anime"),
        ("saison", "menu_saison"),
        ("personnage", "menu_personnage"),
        ("top", "menu_top"),
        ("random", "menu_random"),
        ("planing", "menu_planing"),
        ("profil", "menu_profil"),
        ("help", "menu_help"),
    ]
    .into_iter()
    .map(|(cmd, key)| (cmd.to_string(), t(key, lang).to_string()))
    .collect()
}
