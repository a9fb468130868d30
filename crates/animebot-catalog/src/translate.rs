//! Best-effort text translation.
//!
//! [`GoogleTranslator`] talks to the public `translate_a/single` endpoint
//! (source language auto-detected). Handlers never call it directly: they
//! go through [`translate_or_original`], which degrades to the source
//! text on any failure.

use animebot_core::{config::TranslationConfig, error::AnimeBotError, traits::Translator};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

/// Longest input the endpoint accepts in one request.
const MAX_CHARS: usize = 5000;

/// Translate `text`, or return it unchanged if translation fails.
///
/// Empty or blank input yields `""` without calling the service.
pub async fn translate_or_original(translator: &dyn Translator, text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    match translator.translate(text).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!("translation via {} failed: {e}", translator.name());
            text.to_string()
        }
    }
}

/// Google Translate web endpoint client.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
    target: String,
}

impl GoogleTranslator {
    pub fn new(base_url: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            target: target.into(),
        }
    }

    pub fn from_config(config: &TranslationConfig) -> Self {
        Self::new(config.base_url.clone(), config.target.clone())
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str) -> Result<String, AnimeBotError> {
        if text.chars().count() > MAX_CHARS {
            return Err(AnimeBotError::Translation(format!(
                "text too long ({} chars, max {MAX_CHARS})",
                text.chars().count()
            )));
        }

        let url = format!(
            "{}/translate_a/single",
            self.base_url.trim_end_matches('/')
        );
        debug!("translate: {} chars -> {}", text.len(), self.target);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| AnimeBotError::Translation(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(AnimeBotError::Translation(format!("HTTP {status}")));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| AnimeBotError::Translation(format!("invalid response body: {e}")))?;

        parse_translation(&body)
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// Shape: `[[["<translated>", "<source>", ...], ...], null, "<detected>", ...]`.
pub(crate) fn parse_translation(body: &Value) -> Result<String, AnimeBotError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| AnimeBotError::Translation("no segments in response".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(AnimeBotError::Translation("empty translation".to_string()));
    }
    Ok(translated)
}

/// Translator used when translation is disabled: returns text unchanged.
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    fn name(&self) -> &str {
        "none"
    }

    async fn translate(&self, text: &str) -> Result<String, AnimeBotError> {
        Ok(text.to_string())
    }
}
