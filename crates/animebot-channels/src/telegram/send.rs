//! Message sending: text, photos, edits, callback answers, and command registration.

use super::types::{TgResponse, TgUser};
use super::TelegramChannel;
use crate::utils::{split_message, truncate_chars};
use animebot_core::{
    error::AnimeBotError,
    message::{Button, TextFormat},
};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Telegram's limit on a photo caption, in characters.
const CAPTION_LIMIT: usize = 1024;

/// Telegram's limit on a callback answer toast, in characters.
const TOAST_LIMIT: usize = 200;

/// `parse_mode` value for a format, `None` for plain text.
pub(crate) fn parse_mode(format: TextFormat) -> Option<&'static str> {
    match format {
        TextFormat::Markdown => Some("Markdown"),
        TextFormat::Html => Some("HTML"),
        TextFormat::Plain => None,
    }
}

/// Build the `reply_markup` object for an inline keyboard.
pub(crate) fn keyboard_markup(keyboard: &[Vec<Button>]) -> Option<Value> {
    if keyboard.is_empty() {
        return None;
    }
    let rows: Vec<Vec<Value>> = keyboard
        .iter()
        .map(|row| {
            row.iter()
                .map(|b| match b {
                    Button::Callback { label, data } => {
                        json!({ "text": label, "callback_data": data })
                    }
                    Button::Url { label, url } => json!({ "text": label, "url": url }),
                })
                .collect()
        })
        .collect();
    Some(json!({ "inline_keyboard": rows }))
}

/// Add `parse_mode` and `reply_markup` to a request body when present.
fn decorate(body: &mut Value, format: TextFormat, keyboard: Option<&[Vec<Button>]>) {
    if let Some(mode) = parse_mode(format) {
        body["parse_mode"] = json!(mode);
    }
    if let Some(markup) = keyboard.and_then(keyboard_markup) {
        body["reply_markup"] = markup;
    }
}

impl TelegramChannel {
    /// POST a JSON body to a Bot API method.
    ///
    /// On "can't parse entities" the request is retried once without
    /// `parse_mode`.
    async fn call(&self, method: &str, mut body: Value) -> Result<(), AnimeBotError> {
        let url = format!("{}/{method}", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnimeBotError::Channel(format!("telegram {method} failed: {e}")))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let error_text = resp.text().await.unwrap_or_default();
        if !error_text.contains("can't parse entities") || body.get("parse_mode").is_none() {
            return Err(AnimeBotError::Channel(format!(
                "telegram {method} failed ({status}): {error_text}"
            )));
        }

        warn!("{method}: markup rejected, retrying as plain text: {error_text}");
        if let Some(obj) = body.as_object_mut() {
            obj.remove("parse_mode");
        }
        let plain_resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnimeBotError::Channel(format!("telegram {method} (plain) failed: {e}")))?;
        if !plain_resp.status().is_success() {
            let plain_err = plain_resp.text().await.unwrap_or_default();
            return Err(AnimeBotError::Channel(format!(
                "telegram {method} (plain fallback) failed: {plain_err}"
            )));
        }
        Ok(())
    }

    /// Send a text message to a specific chat. Long texts are split; the
    /// keyboard goes on the last chunk.
    pub(crate) async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        format: TextFormat,
        keyboard: &[Vec<Button>],
    ) -> Result<(), AnimeBotError> {
        let chunks = split_message(text, 4096);
        let last = chunks.len().saturating_sub(1);

        for (i, chunk) in chunks.into_iter().enumerate() {
            let mut body = json!({
                "chat_id": chat_id,
                "text": chunk,
            });
            decorate(&mut body, format, (i == last).then_some(keyboard));
            self.call("sendMessage", body).await?;
        }

        Ok(())
    }

    /// Send a photo by URL with a caption and keyboard.
    ///
    /// Captions over Telegram's limit are rejected here so the caller can
    /// fall back to a text message.
    pub(crate) async fn send_photo_url(
        &self,
        chat_id: i64,
        photo_url: &str,
        caption: &str,
        format: TextFormat,
        keyboard: &[Vec<Button>],
    ) -> Result<(), AnimeBotError> {
        if caption.chars().count() > CAPTION_LIMIT {
            return Err(AnimeBotError::Channel(format!(
                "caption too long for a photo ({} chars)",
                caption.chars().count()
            )));
        }
        let mut body = json!({
            "chat_id": chat_id,
            "photo": photo_url,
            "caption": caption,
        });
        decorate(&mut body, format, Some(keyboard));
        self.call("sendPhoto", body).await
    }

    /// Replace the text of a message the bot sent earlier.
    pub(crate) async fn edit_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        format: TextFormat,
        keyboard: &[Vec<Button>],
    ) -> Result<(), AnimeBotError> {
        let mut body = json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
        });
        decorate(&mut body, format, Some(keyboard));
        self.call("editMessageText", body).await
    }

    /// Acknowledge a button press so the client stops its spinner.
    pub(crate) async fn answer_callback_query(
        &self,
        query_id: &str,
        text: Option<&str>,
    ) -> Result<(), AnimeBotError> {
        let mut body = json!({ "callback_query_id": query_id });
        if let Some(t) = text {
            body["text"] = json!(truncate_chars(t, TOAST_LIMIT));
        }
        self.call("answerCallbackQuery", body).await
    }

    /// Register bot commands with Telegram so users see an autocomplete menu.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        if self.commands.is_empty() {
            return;
        }
        let commands: Vec<Value> = self
            .commands
            .iter()
            .map(|(command, description)| json!({ "command": command, "description": description }))
            .collect();

        let url = format!("{}/setMyCommands", self.base_url);
        match self
            .client
            .post(&url)
            .json(&json!({ "commands": commands }))
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => {
                info!("registered Telegram bot commands");
            }
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                warn!("failed to register Telegram bot commands: {body}");
            }
            Err(e) => {
                warn!("failed to register Telegram bot commands: {e}");
            }
        }
    }

    /// The bot's own `@username`, used to recognize mentions in groups.
    pub(crate) async fn fetch_bot_username(&self) -> Option<String> {
        let url = format!("{}/getMe", self.base_url);
        let resp = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("telegram getMe failed: {e}");
                return None;
            }
        };
        match resp.json::<TgResponse<TgUser>>().await {
            Ok(body) if body.ok => {
                let username = body.result.and_then(|u| u.username);
                if let Some(ref name) = username {
                    info!("telegram bot identity: @{name}");
                }
                username
            }
            Ok(body) => {
                warn!(
                    "telegram getMe error: {}",
                    body.description.unwrap_or_default()
                );
                None
            }
            Err(e) => {
                warn!("telegram getMe parse failed: {e}");
                None
            }
        }
    }

    /// Send a chat action (e.g. "typing") to a chat.
    pub(crate) async fn send_chat_action(
        &self,
        chat_id: i64,
        action: &str,
    ) -> Result<(), AnimeBotError> {
        let url = format!("{}/sendChatAction", self.base_url);
        let body = json!({
            "chat_id": chat_id,
            "action": action,
        });

        self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnimeBotError::Channel(format!("telegram sendChatAction failed: {e}")))?;

        Ok(())
    }
}
