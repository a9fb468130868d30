//! Card renderer: turns catalog records into chat messages.
//!
//! Everything here is pure formatting. Network calls (including
//! translation) happen in the handlers before rendering.

use crate::callbacks::Callback;
use crate::i18n::{self, day_name, t};
use animebot_core::{
    catalog::{Anime, Character, CharacterRole, Recommendation, StreamingLink},
    message::{Button, OutgoingMessage, TextFormat},
};
use animebot_memory::UserListState;
use chrono::Weekday;

/// Entries shown per list on the profile.
const PROFILE_PREVIEW: usize = 5;

/// Longest character description kept on a card, so the caption fits a photo.
const ABOUT_PREVIEW: usize = 600;

/// Longest title shown on a button.
const BUTTON_TITLE: usize = 40;

/// A rendered reply: text (or caption), optional image, inline keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub caption: String,
    pub photo_url: Option<String>,
    pub keyboard: Vec<Vec<Button>>,
}

impl Card {
    fn text(caption: String) -> Self {
        Self {
            caption,
            photo_url: None,
            keyboard: Vec::new(),
        }
    }

    /// Photo-with-caption when an image is known, plain Markdown text otherwise.
    pub fn into_message(self) -> OutgoingMessage {
        let msg = OutgoingMessage::text(self.caption)
            .with_format(TextFormat::Markdown)
            .with_keyboard(self.keyboard);
        match self.photo_url {
            Some(url) => msg.with_photo(url),
            None => msg,
        }
    }
}

/// Escape Telegram legacy-Markdown metacharacters in user-visible data.
pub fn escape_md(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

fn shorten(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Display title of an anime, falling back to the localized "unknown".
pub fn anime_title<'a>(anime: &'a Anime, lang: &str) -> &'a str {
    anime
        .title
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| t("unknown", lang))
}

/// The main anime card.
///
/// `studio_text` is the (already translated) studio list; `None` renders the
/// localized "unknown".
pub fn anime_card(anime: &Anime, studio_text: Option<&str>, lang: &str) -> Card {
    let genres = anime.genre_names();
    let genres = if genres.is_empty() {
        "?".to_string()
    } else {
        escape_md(&genres.join(", "))
    };
    let studio = studio_text
        .filter(|s| !s.trim().is_empty())
        .map(escape_md)
        .unwrap_or_else(|| t("unknown", lang).to_string());

    let caption = format!(
        "🎬 *{title}*\n\
         {year_l} {year}\n\
         {score_l} {score}/10\n\
         {eps_l} {episodes}\n\
         {status_l} {status}\n\
         {genres_l} {genres}\n\
         {studio_l} {studio}",
        title = escape_md(anime_title(anime, lang)),
        year_l = t("label_year", lang),
        year = or_unknown(anime.year),
        score_l = t("label_score", lang),
        score = or_unknown(anime.score),
        eps_l = t("label_episodes", lang),
        episodes = or_unknown(anime.episodes),
        status_l = t("label_status", lang),
        status = or_unknown(anime.status.as_deref().map(escape_md)),
        genres_l = t("label_genres", lang),
        studio_l = t("label_studio", lang),
    );

    let id = anime.mal_id;
    let keyboard = [
        ("btn_synopsis", Callback::Synopsis(id)),
        ("btn_trailer", Callback::Trailer(id)),
        ("btn_characters", Callback::Characters(id)),
        ("btn_similar", Callback::Similar(id)),
        ("btn_streaming", Callback::Streaming(id)),
        ("btn_favorite", Callback::Favorite { id, title: None }),
    ]
    .into_iter()
    .map(|(key, cb)| vec![Button::callback(t(key, lang), cb.to_string())])
    .collect();

    Card {
        caption,
        photo_url: anime.image_url().map(str::to_string),
        keyboard,
    }
}

/// Card for a character search result. `about` is the translated description.
pub fn character_card(character: &Character, about: &str, lang: &str) -> Card {
    let name = character
        .name
        .as_deref()
        .unwrap_or_else(|| t("unknown", lang));
    let mut caption = format!("👤 *{}*\n", escape_md(name));
    if let Some(kanji) = character.name_kanji.as_deref().filter(|k| !k.is_empty()) {
        caption.push_str(&format!("{} {}\n", t("label_kanji", lang), escape_md(kanji)));
    }
    caption.push_str(&format!(
        "{} {}\n\n",
        t("label_member_favorites", lang),
        or_unknown(character.favorites)
    ));
    if about.trim().is_empty() {
        caption.push_str(t("no_about", lang));
    } else {
        caption.push_str(&escape_md(&shorten(about.trim(), ABOUT_PREVIEW)));
    }

    let keyboard = character
        .url
        .as_deref()
        .map(|url| vec![vec![Button::url("MyAnimeList", url)]])
        .unwrap_or_default();

    Card {
        caption,
        photo_url: character.image_url().map(str::to_string),
        keyboard,
    }
}

/// Numbered list of titles with scores (top, seasons), one button per entry.
pub fn ranked_list(header: &str, entries: &[Anime], lang: &str) -> Card {
    let mut caption = format!("{header}\n\n");
    let mut keyboard = Vec::with_capacity(entries.len());
    for (i, anime) in entries.iter().enumerate() {
        let title = anime_title(anime, lang);
        caption.push_str(&format!(
            "{}. *{}* (⭐ {})\n",
            i + 1,
            escape_md(title),
            or_unknown(anime.score)
        ));
        keyboard.push(vec![Button::callback(
            format!("{}. {}", i + 1, shorten(title, BUTTON_TITLE)),
            Callback::Anime(anime.mal_id).to_string(),
        )]);
    }
    Card {
        caption: caption.trim_end().to_string(),
        photo_url: None,
        keyboard,
    }
}

/// One button per weekday, Monday first. Days with nothing airing get the
/// `none` payload.
pub fn week_keyboard(schedule: &[Anime], lang: &str) -> Vec<Vec<Button>> {
    const WEEK: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    WEEK.iter()
        .map(|&day| {
            let count = schedule
                .iter()
                .filter(|a| a.broadcast.as_ref().and_then(|b| b.weekday()) == Some(day))
                .count();
            let name = day_name(day, lang);
            let button = if count > 0 {
                Button::callback(format!("{name} ({count})"), Callback::Day(day).to_string())
            } else {
                Button::callback(name, Callback::NoRelease.to_string())
            };
            vec![button]
        })
        .collect()
}

/// Releases of one weekday, with a button back to the week overview.
pub fn day_listing(day: Weekday, entries: &[Anime], lang: &str) -> Card {
    let name = day_name(day, lang);
    let aired: Vec<&Anime> = entries
        .iter()
        .filter(|a| a.broadcast.as_ref().and_then(|b| b.weekday()) == Some(day))
        .collect();

    let caption = if aired.is_empty() {
        i18n::day_empty(lang, name)
    } else {
        let lines: Vec<String> = aired
            .iter()
            .map(|a| {
                let time = a
                    .broadcast
                    .as_ref()
                    .and_then(|b| b.time.as_deref())
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| t("unknown_time", lang));
                format!("• *{}* ⏰ {time}", escape_md(anime_title(a, lang)))
            })
            .collect();
        format!("{}\n\n{}", i18n::day_header(lang, name), lines.join("\n"))
    };

    Card {
        caption,
        photo_url: None,
        keyboard: vec![vec![Button::callback(
            t("btn_week", lang),
            Callback::Planning.to_string(),
        )]],
    }
}

/// The `/profil` summary: every list with a preview of its first entries.
pub fn profile(state: Option<&UserListState>, lang: &str) -> String {
    let empty = UserListState::default();
    let state = state.unwrap_or(&empty);
    let sections = [
        ("list_favorites", &state.favorites),
        ("list_watchlist", &state.watchlist),
        ("list_completed", &state.completed),
        ("list_dropped", &state.dropped),
    ];

    let mut blocks = Vec::with_capacity(sections.len());
    for (key, items) in sections {
        let mut block = format!("{} ({}):", t(key, lang), items.len());
        for item in items.iter().take(PROFILE_PREVIEW) {
            block.push_str(&format!("\n• {}", escape_md(item)));
        }
        if items.len() > PROFILE_PREVIEW {
            block.push('\n');
            block.push_str(&i18n::more_items(lang, items.len() - PROFILE_PREVIEW));
        }
        blocks.push(block);
    }
    format!("{}\n\n{}", t("profile_header", lang), blocks.join("\n\n"))
}

/// Main characters of an anime, main roles first.
pub fn character_list(roles: &[CharacterRole], limit: usize, lang: &str) -> Card {
    let mut sorted: Vec<&CharacterRole> = roles.iter().collect();
    sorted.sort_by_key(|r| r.role.as_deref() != Some("Main"));

    let mut caption = i18n::characters_header(lang).to_string();
    caption.push('\n');
    for role in sorted.into_iter().take(limit) {
        let name = role
            .character
            .name
            .as_deref()
            .unwrap_or_else(|| t("unknown", lang));
        caption.push_str(&format!("\n• *{}*", escape_md(name)));
        if let Some(r) = role.role.as_deref() {
            caption.push_str(&format!(" ({})", i18n::character_role(lang, r)));
        }
    }
    Card::text(caption)
}

/// Recommended titles, each with a button opening its card.
pub fn recommendation_list(recs: &[Recommendation], limit: usize, lang: &str) -> Card {
    let mut caption = i18n::similar_header(lang).to_string();
    caption.push('\n');
    let mut keyboard = Vec::new();
    for rec in recs.iter().take(limit) {
        let rec_title = rec
            .entry
            .title
            .as_deref()
            .unwrap_or_else(|| t("unknown", lang));
        caption.push_str(&format!("\n• *{}*", escape_md(rec_title)));
        if let Some(votes) = rec.votes {
            caption.push_str(&format!(" (👍 {votes})"));
        }
        keyboard.push(vec![Button::callback(
            shorten(rec_title, BUTTON_TITLE),
            Callback::Anime(rec.entry.mal_id).to_string(),
        )]);
    }
    Card {
        caption,
        photo_url: None,
        keyboard,
    }
}

/// Streaming sites as link buttons.
pub fn streaming_list(links: &[StreamingLink], lang: &str) -> Card {
    let mut caption = i18n::streaming_header(lang).to_string();
    caption.push('\n');
    let mut keyboard = Vec::new();
    for link in links {
        caption.push_str(&format!("\n• {}", escape_md(&link.name)));
        keyboard.push(vec![Button::url(&link.name, &link.url)]);
    }
    Card {
        caption,
        photo_url: None,
        keyboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animebot_core::catalog::{
        AnimeRef, Broadcast, CharacterRef, ImageSet, Images, Named, Trailer,
    };

    fn bleach() -> Anime {
        Anime {
            mal_id: 269,
            title: Some("Bleach".into()),
            year: Some(2004),
            score: Some(7.9),
            episodes: Some(366),
            status: Some("Finished Airing".into()),
            genres: vec![
                Named {
                    mal_id: None,
                    name: "Action".into(),
                },
                Named {
                    mal_id: None,
                    name: "Adventure".into(),
                },
            ],
            studios: vec![Named {
                mal_id: None,
                name: "Studio Pierrot".into(),
            }],
            synopsis: Some("Ichigo sees ghosts.".into()),
            trailer: Some(Trailer { url: None }),
            images: Some(Images {
                jpg: Some(ImageSet {
                    image_url: None,
                    large_image_url: Some("https://cdn/bleach.jpg".into()),
                }),
            }),
            broadcast: None,
        }
    }

    fn airing(id: u64, title: &str, day: &str, time: Option<&str>) -> Anime {
        Anime {
            mal_id: id,
            title: Some(title.into()),
            broadcast: Some(Broadcast {
                day: Some(day.into()),
                time: time.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_anime_card_fields_and_buttons() {
        let card = anime_card(&bleach(), Some("Studio Pierrot"), "fr");
        assert!(card.caption.starts_with("🎬 *Bleach*"));
        assert!(card.caption.contains("📅 Année : 2004"));
        assert!(card.caption.contains("⭐ Note : 7.9/10"));
        assert!(card.caption.contains("📺 Épisodes : 366"));
        assert!(card.caption.contains("🎭 Genres : Action, Adventure"));
        assert!(card.caption.contains("🏢 Studio : Studio Pierrot"));
        assert_eq!(card.photo_url.as_deref(), Some("https://cdn/bleach.jpg"));

        let payloads: Vec<&str> = card
            .keyboard
            .iter()
            .flatten()
            .filter_map(Button::data)
            .collect();
        assert_eq!(
            payloads,
            [
                "synopsis_269",
                "trailer_269",
                "characters_269",
                "similar_269",
                "streaming_269",
                "fav_269"
            ]
        );
    }

    #[test]
    fn test_anime_card_missing_fields() {
        let bare = Anime {
            mal_id: 7,
            ..Default::default()
        };
        let card = anime_card(&bare, None, "fr");
        assert!(card.caption.contains("📅 Année : ?"));
        assert!(card.caption.contains("⭐ Note : ?/10"));
        assert!(card.caption.contains("📺 Épisodes : ?"));
        assert!(card.caption.contains("⏳ Statut : ?"));
        assert!(card.caption.contains("🏢 Studio : Inconnu"));
        assert!(card.photo_url.is_none());
        assert_eq!(card.keyboard.len(), 6);
    }

    #[test]
    fn test_into_message_picks_photo_only_with_image() {
        let with_image = anime_card(&bleach(), None, "en").into_message();
        assert_eq!(with_image.photo_url.as_deref(), Some("https://cdn/bleach.jpg"));

        let bare = Anime {
            mal_id: 7,
            ..Default::default()
        };
        let text_only = anime_card(&bare, None, "en").into_message();
        assert!(text_only.photo_url.is_none());
        assert_eq!(text_only.format, TextFormat::Markdown);
        assert_eq!(text_only.keyboard.len(), 6);
    }

    #[test]
    fn test_escape_md() {
        assert_eq!(escape_md("Re_Zero"), "Re\\_Zero");
        assert_eq!(escape_md("*a* `b` [c]"), "\\*a\\* \\`b\\` \\[c]");
        assert_eq!(escape_md("plain"), "plain");
    }

    #[test]
    fn test_ranked_list_numbering() {
        let list = vec![bleach(), Anime {
            mal_id: 1,
            title: Some("Cowboy Bebop".into()),
            score: None,
            ..Default::default()
        }];
        let card = ranked_list("🏆 *Top*", &list, "fr");
        assert!(card.caption.contains("1. *Bleach* (⭐ 7.9)"));
        assert!(card.caption.contains("2. *Cowboy Bebop* (⭐ ?)"));
        assert_eq!(card.keyboard[1][0].data(), Some("anime_1"));
    }

    #[test]
    fn test_week_keyboard_marks_empty_days() {
        let schedule = vec![
            airing(1, "A", "Mondays", Some("01:00")),
            airing(2, "B", "Mondays", None),
            airing(3, "C", "Fridays", None),
        ];
        let kb = week_keyboard(&schedule, "fr");
        assert_eq!(kb.len(), 7);
        assert_eq!(kb[0][0].label(), "Lundi (2)");
        assert_eq!(kb[0][0].data(), Some("day_Monday"));
        assert_eq!(kb[1][0].label(), "Mardi");
        assert_eq!(kb[1][0].data(), Some("none"));
        assert_eq!(kb[4][0].data(), Some("day_Friday"));
    }

    #[test]
    fn test_day_listing() {
        let schedule = vec![
            airing(1, "One Piece", "Sundays", Some("09:30")),
            airing(2, "Other", "Mondays", None),
            airing(3, "No Time", "Sundays", None),
        ];
        let card = day_listing(Weekday::Sun, &schedule, "fr");
        assert!(card.caption.starts_with("📅 *Sorties du Dimanche*"));
        assert!(card.caption.contains("• *One Piece* ⏰ 09:30"));
        assert!(card.caption.contains("• *No Time* ⏰ Heure inconnue"));
        assert!(!card.caption.contains("Other"));
        assert_eq!(card.keyboard[0][0].data(), Some("planing"));

        let empty = day_listing(Weekday::Tue, &schedule, "fr");
        assert_eq!(empty.caption, "📅 Aucune sortie prévue pour le Mardi.");
    }

    #[test]
    fn test_profile_preview_and_overflow() {
        let state = UserListState {
            favorites: (1..=7).map(|i| format!("Anime {i}")).collect(),
            watchlist: vec!["Frieren".into()],
            ..Default::default()
        };
        let text = profile(Some(&state), "fr");
        assert!(text.starts_with("👤 *Votre Profil*"));
        assert!(text.contains("❤️ *Favoris* (7):"));
        assert!(text.contains("• Anime 5"));
        assert!(!text.contains("• Anime 6"));
        assert!(text.contains("... et 2 de plus"));
        assert!(text.contains("📋 *À regarder* (1):\n• Frieren"));
        assert!(text.contains("❌ *Abandonnés* (0):"));
    }

    #[test]
    fn test_profile_for_unknown_user() {
        let text = profile(None, "en");
        assert!(text.contains("❤️ *Favorites* (0):"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn test_character_card() {
        let character = Character {
            mal_id: 5,
            name: Some("Ichigo Kurosaki".into()),
            name_kanji: Some("黒崎 一護".into()),
            favorites: Some(1234),
            about: Some("x".repeat(2000)),
            url: Some("https://myanimelist.net/character/5".into()),
            images: None,
        };
        let card = character_card(&character, &"y".repeat(2000), "fr");
        assert!(card.caption.starts_with("👤 *Ichigo Kurosaki*"));
        assert!(card.caption.contains("黒崎 一護"));
        assert!(card.caption.contains("1234"));
        assert!(card.caption.chars().count() < 1024);
        assert!(card.photo_url.is_none());
        assert_eq!(
            card.keyboard[0][0],
            Button::url("MyAnimeList", "https://myanimelist.net/character/5")
        );
    }

    #[test]
    fn test_character_list_main_first() {
        let roles = vec![
            CharacterRole {
                character: CharacterRef {
                    mal_id: 2,
                    name: Some("Rukia".into()),
                },
                role: Some("Supporting".into()),
            },
            CharacterRole {
                character: CharacterRef {
                    mal_id: 1,
                    name: Some("Ichigo".into()),
                },
                role: Some("Main".into()),
            },
        ];
        let card = character_list(&roles, 10, "fr");
        let ichigo = card.caption.find("Ichigo").unwrap();
        let rukia = card.caption.find("Rukia").unwrap();
        assert!(ichigo < rukia);
        assert!(card.caption.contains("(Principal)"));
    }

    #[test]
    fn test_recommendations_link_to_cards() {
        let recs = vec![Recommendation {
            entry: AnimeRef {
                mal_id: 20,
                title: Some("Naruto".into()),
            },
            votes: Some(12),
        }];
        let card = recommendation_list(&recs, 5, "en");
        assert!(card.caption.contains("• *Naruto* (👍 12)"));
        assert_eq!(card.keyboard[0][0].data(), Some("anime_20"));
    }

    #[test]
    fn test_streaming_list_uses_url_buttons() {
        let links = vec![StreamingLink {
            name: "Crunchyroll".into(),
            url: "https://crunchyroll.com/bleach".into(),
        }];
        let card = streaming_list(&links, "en");
        assert!(card.caption.contains("• Crunchyroll"));
        assert_eq!(
            card.keyboard[0][0],
            Button::url("Crunchyroll", "https://crunchyroll.com/bleach")
        );
    }
}
