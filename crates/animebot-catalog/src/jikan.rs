//! Jikan (unofficial MyAnimeList) REST client.
//!
//! Every endpoint answers with a `{"data": ...}` envelope. An absent or
//! empty `data` member is "not found"; anything else that goes wrong is a
//! failure. No retries, no rate limiting.
//! Docs: <https://docs.api.jikan.moe/>

use animebot_core::{
    catalog::{Anime, Character, CharacterRole, Lookup, Recommendation, Season, StreamingLink},
    config::CatalogConfig,
    error::AnimeBotError,
    traits::Catalog,
};
use async_trait::async_trait;
use chrono::Weekday;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Catalog client for the Jikan v4 API.
pub struct JikanClient {
    client: reqwest::Client,
    base_url: String,
}

impl JikanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// GET `path` and decode the envelope into a [`Lookup`].
    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Lookup<T> {
        match self.fetch_data(path, query).await {
            Ok(Some(v)) => Lookup::Found(v),
            Ok(None) => {
                debug!("jikan: no data for {path}");
                Lookup::NotFound
            }
            Err(e) => {
                warn!("jikan: {path} failed: {e}");
                Lookup::Failed(e.to_string())
            }
        }
    }

    async fn fetch_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, AnimeBotError> {
        let url = self.url(path);
        debug!("jikan: GET {url}");

        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AnimeBotError::Catalog(format!("request failed: {e}")))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AnimeBotError::Catalog(format!("HTTP {status}: {text}")));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| AnimeBotError::Catalog(format!("invalid response body: {e}")))?;

        parse_envelope(body)
    }

    /// First element of a list endpoint.
    async fn fetch_first<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Lookup<T> {
        match self.fetch::<Vec<T>>(path, query).await {
            Lookup::Found(list) => list.into_iter().next().map_or(Lookup::NotFound, Lookup::Found),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::Failed(e) => Lookup::Failed(e),
        }
    }
}

/// Path of the seasonal listing. The season token is always lowercase.
pub fn season_path(year: u16, season: Season) -> String {
    format!("/seasons/{year}/{}", season.as_str())
}

/// Lowercase English day name as accepted by the `filter` parameter.
pub fn weekday_filter(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Extract `data` from a response envelope.
///
/// `Ok(None)` when `data` is missing, `null`, `{}` or `[]`.
pub(crate) fn parse_envelope<T: DeserializeOwned>(body: Value) -> Result<Option<T>, AnimeBotError> {
    let Value::Object(mut envelope) = body else {
        return Err(AnimeBotError::Catalog(
            "response is not a JSON object".to_string(),
        ));
    };

    match envelope.remove("data") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) if items.is_empty() => Ok(None),
        Some(Value::Object(fields)) if fields.is_empty() => Ok(None),
        Some(data) => serde_json::from_value(data)
            .map(Some)
            .map_err(|e| AnimeBotError::Catalog(format!("unexpected data shape: {e}"))),
    }
}

#[async_trait]
impl Catalog for JikanClient {
    fn name(&self) -> &str {
        "jikan"
    }

    async fn search_anime(&self, query: &str) -> Lookup<Anime> {
        self.fetch_first("/anime", &[("q", query)]).await
    }

    async fn anime(&self, id: u64) -> Lookup<Anime> {
        self.fetch(&format!("/anime/{id}"), &[]).await
    }

    async fn top_anime(&self) -> Lookup<Vec<Anime>> {
        self.fetch("/top/anime", &[]).await
    }

    async fn random_anime(&self) -> Lookup<Anime> {
        self.fetch("/random/anime", &[]).await
    }

    async fn season(&self, year: u16, season: Season) -> Lookup<Vec<Anime>> {
        self.fetch(&season_path(year, season), &[]).await
    }

    async fn schedule(&self, day: Option<Weekday>) -> Lookup<Vec<Anime>> {
        match day {
            Some(d) => {
                self.fetch("/schedules", &[("filter", weekday_filter(d))])
                    .await
            }
            None => self.fetch("/schedules", &[]).await,
        }
    }

    async fn search_character(&self, query: &str) -> Lookup<Character> {
        self.fetch_first("/characters", &[("q", query)]).await
    }

    async fn anime_characters(&self, id: u64) -> Lookup<Vec<CharacterRole>> {
        self.fetch(&format!("/anime/{id}/characters"), &[]).await
    }

    async fn recommendations(&self, id: u64) -> Lookup<Vec<Recommendation>> {
        self.fetch(&format!("/anime/{id}/recommendations"), &[])
            .await
    }

    async fn streaming(&self, id: u64) -> Lookup<Vec<StreamingLink>> {
        self.fetch(&format!("/anime/{id}/streaming"), &[]).await
    }

    async fn is_available(&self) -> bool {
        match self.client.get(self.url("/")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("jikan: availability check failed: {e}");
                false
            }
        }
    }
}
