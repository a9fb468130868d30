//! Catalog record types and the lookup outcome.
//!
//! Field names follow the Jikan v4 JSON so records deserialize directly
//! from the `data` member of a response envelope. Everything except the
//! id is optional: the upstream API returns `null` freely.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of one catalog call.
///
/// "Nothing found" and "the request failed" are distinct: callers render
/// different text for each.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// Upstream returned a non-empty `data` member.
    Found(T),
    /// Upstream answered, but `data` was missing, `null`, `{}` or `[]`.
    NotFound,
    /// Transport, HTTP status, or parse failure.
    Failed(String),
}

impl<T> Lookup<T> {
    /// Transform the found value, keeping the other outcomes.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Self::Found(v) => Lookup::Found(f(v)),
            Self::NotFound => Lookup::NotFound,
            Self::Failed(e) => Lookup::Failed(e),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found value, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }
}

/// An anime entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    pub mal_id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<Named>,
    #[serde(default)]
    pub studios: Vec<Named>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub trailer: Option<Trailer>,
    #[serde(default)]
    pub images: Option<Images>,
    /// Only present on airing entries (schedules, seasons).
    #[serde(default)]
    pub broadcast: Option<Broadcast>,
}

impl Anime {
    pub fn image_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|i| i.jpg.as_ref())
            .and_then(|j| j.large_image_url.as_deref().or(j.image_url.as_deref()))
            .filter(|u| !u.is_empty())
    }

    pub fn trailer_url(&self) -> Option<&str> {
        self.trailer
            .as_ref()
            .and_then(|t| t.url.as_deref())
            .filter(|u| !u.is_empty())
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn studio_names(&self) -> Vec<&str> {
        self.studios.iter().map(|s| s.name.as_str()).collect()
    }
}

/// A `{ "name": ... }` reference (genre, studio, producer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub mal_id: Option<u64>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub jpg: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

/// Weekly broadcast slot of an airing anime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    /// Upstream uses the plural form ("Mondays"); older payloads use "Monday".
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl Broadcast {
    pub fn weekday(&self) -> Option<Weekday> {
        let day = self.day.as_deref()?;
        let day = day.strip_suffix('s').unwrap_or(day);
        day.parse().ok()
    }
}

/// A character entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub mal_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_kanji: Option<String>,
    #[serde(default)]
    pub favorites: Option<u64>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
}

impl Character {
    pub fn image_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|i| i.jpg.as_ref())
            .and_then(|j| j.image_url.as_deref())
            .filter(|u| !u.is_empty())
    }
}

/// A character appearing in an anime, with their role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRole {
    pub character: CharacterRef,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRef {
    pub mal_id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// A "similar anime" recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub entry: AnimeRef,
    #[serde(default)]
    pub votes: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeRef {
    pub mal_id: u64,
    #[serde(default)]
    pub title: Option<String>,
}

/// Where an anime can be streamed legally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamingLink {
    pub name: String,
    pub url: String,
}

/// Anime season of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Lowercase token as used in request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    /// Case-insensitive: `FALL`, `Fall` and `fall` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            other => Err(format!("unknown season: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_case_insensitive() {
        assert_eq!("FALL".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!("Spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!(" winter ".parse::<Season>().unwrap(), Season::Winter);
        assert!("autumn".parse::<Season>().is_err());
        assert_eq!(Season::Fall.to_string(), "fall");
    }

    #[test]
    fn test_anime_deserializes_with_nulls() {
        let json = r#"{
            "mal_id": 269,
            "title": "Bleach",
            "year": null,
            "score": 7.9,
            "episodes": null,
            "status": "Finished Airing",
            "genres": [{"mal_id": 1, "type": "anime", "name": "Action", "url": "x"}],
            "studios": [{"mal_id": 1, "name": "Studio Pierrot"}],
            "synopsis": null,
            "trailer": {"youtube_id": null, "url": null, "embed_url": null},
            "images": {"jpg": {"image_url": "a.jpg", "large_image_url": "b.jpg"}}
        }"#;
        let anime: Anime = serde_json::from_str(json).unwrap();
        assert_eq!(anime.mal_id, 269);
        assert_eq!(anime.title.as_deref(), Some("Bleach"));
        assert!(anime.year.is_none());
        assert!(anime.trailer_url().is_none());
        assert_eq!(anime.image_url(), Some("b.jpg"));
        assert_eq!(anime.genre_names(), vec!["Action"]);
        assert_eq!(anime.studio_names(), vec!["Studio Pierrot"]);
    }

    #[test]
    fn test_image_url_falls_back_to_small() {
        let anime: Anime =
            serde_json::from_str(r#"{"mal_id": 1, "images": {"jpg": {"image_url": "a.jpg"}}}"#)
                .unwrap();
        assert_eq!(anime.image_url(), Some("a.jpg"));

        let bare: Anime = serde_json::from_str(r#"{"mal_id": 2}"#).unwrap();
        assert!(bare.image_url().is_none());
    }

    #[test]
    fn test_broadcast_weekday_plural_and_singular() {
        let plural = Broadcast {
            day: Some("Mondays".into()),
            time: None,
        };
        assert_eq!(plural.weekday(), Some(Weekday::Mon));
        let singular = Broadcast {
            day: Some("Sunday".into()),
            time: None,
        };
        assert_eq!(singular.weekday(), Some(Weekday::Sun));
        let unknown = Broadcast {
            day: Some("Unknown".into()),
            time: None,
        };
        assert!(unknown.weekday().is_none());
    }

    #[test]
    fn test_lookup_map_keeps_outcome() {
        let found: Lookup<u32> = Lookup::Found(2);
        assert_eq!(found.map(|v| v * 2), Lookup::Found(4));
        let missing: Lookup<u32> = Lookup::NotFound;
        assert_eq!(missing.map(|v| v * 2), Lookup::NotFound);
        let failed: Lookup<u32> = Lookup::Failed("boom".into());
        assert!(!failed.is_found());
    }
}
