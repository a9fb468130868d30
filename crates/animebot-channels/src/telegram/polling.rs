//! Long-polling update loop and Channel trait implementation.

use super::types::{TgResponse, TgUpdate, TgUser};
use super::TelegramChannel;
use animebot_core::{
    error::AnimeBotError,
    message::{CallbackQuery, IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, AnimeBotError> {
        self.register_commands().await;
        let bot_username = self.fetch_bot_username().await;

        let (tx, rx) = mpsc::channel(64);
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let allowed_users = self.config.allowed_users.clone();
        let last_update_id = self.last_update_id.clone();

        info!("Telegram channel starting long polling...");

        tokio::spawn(async move {
            let mut backoff_secs: u64 = 1;

            loop {
                let last = last_update_id.lock().await;
                let offset = last.map(|id| id + 1);
                drop(last);

                let mut url = format!("{base_url}/getUpdates?timeout=30");
                if let Some(off) = offset {
                    url.push_str(&format!("&offset={off}"));
                }

                let resp = match client
                    .get(&url)
                    .timeout(std::time::Duration::from_secs(35))
                    .send()
                    .await
                {
                    Ok(r) => r,
                    Err(e) => {
                        error!("telegram poll error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                let body: TgResponse<Vec<TgUpdate>> = match resp.json().await {
                    Ok(b) => b,
                    Err(e) => {
                        error!("telegram parse error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                if !body.ok {
                    error!(
                        "telegram API error (retry in {backoff_secs}s): {}",
                        body.description.unwrap_or_default()
                    );
                    tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                    backoff_secs = (backoff_secs * 2).min(60);
                    continue;
                }

                // Successful poll -- reset backoff.
                backoff_secs = 1;

                let updates = body.result.unwrap_or_default();

                if let Some(last_update) = updates.last() {
                    *last_update_id.lock().await = Some(last_update.update_id);
                }

                for update in updates {
                    let Some(incoming) =
                        to_incoming(update, &allowed_users, bot_username.as_deref())
                    else {
                        continue;
                    };

                    if tx.send(incoming).await.is_err() {
                        info!("telegram channel receiver dropped, stopping poll");
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), AnimeBotError> {
        let chat_id = parse_chat_id(message.reply_target.as_deref())?;

        if let Some(ref photo) = message.photo_url {
            match self
                .send_photo_url(chat_id, photo, &message.text, message.format, &message.keyboard)
                .await
            {
                Ok(()) => return Ok(()),
                Err(e) => warn!("sendPhoto failed, sending as text: {e}"),
            }
        }

        self.send_text(chat_id, &message.text, message.format, &message.keyboard)
            .await
    }

    async fn edit(&self, message_id: &str, message: OutgoingMessage) -> Result<(), AnimeBotError> {
        let chat_id = parse_chat_id(message.reply_target.as_deref())?;
        let message_id: i64 = message_id.parse().map_err(|e| {
            AnimeBotError::Channel(format!("invalid telegram message_id '{message_id}': {e}"))
        })?;
        self.edit_text(
            chat_id,
            message_id,
            &message.text,
            message.format,
            &message.keyboard,
        )
        .await
    }

    async fn answer_callback(
        &self,
        query_id: &str,
        text: Option<&str>,
    ) -> Result<(), AnimeBotError> {
        self.answer_callback_query(query_id, text).await
    }

    async fn send_typing(&self, target: &str) -> Result<(), AnimeBotError> {
        let chat_id = parse_chat_id(Some(target))?;
        self.send_chat_action(chat_id, "typing").await
    }

    async fn stop(&self) -> Result<(), AnimeBotError> {
        info!("Telegram channel stopped");
        Ok(())
    }
}

fn parse_chat_id(target: Option<&str>) -> Result<i64, AnimeBotError> {
    let target =
        target.ok_or_else(|| AnimeBotError::Channel("no reply_target on outgoing message".into()))?;
    target
        .parse()
        .map_err(|e| AnimeBotError::Channel(format!("invalid telegram chat_id '{target}': {e}")))
}

/// Convert one update into an event for the gateway.
///
/// Returns `None` for updates the bot ignores: unauthorized users, non-text
/// messages, and group chatter that neither is a command nor mentions the bot.
pub(super) fn to_incoming(
    update: TgUpdate,
    allowed_users: &[i64],
    bot_username: Option<&str>,
) -> Option<IncomingMessage> {
    if let Some(cb) = update.callback_query {
        if !is_allowed(&cb.from, allowed_users) {
            return None;
        }
        let data = cb.data?;
        let (reply_target, message_id, is_group) = match cb.message {
            Some(ref m) => (
                m.chat.id.to_string(),
                Some(m.message_id.to_string()),
                m.chat.is_group(),
            ),
            None => (cb.from.id.to_string(), None, false),
        };
        return Some(IncomingMessage {
            id: Uuid::new_v4(),
            channel: "telegram".to_string(),
            sender_id: cb.from.id.to_string(),
            sender_name: Some(cb.from.display_name()),
            text: data,
            timestamp: chrono::Utc::now(),
            reply_target: Some(reply_target),
            is_group,
            callback: Some(CallbackQuery {
                query_id: cb.id,
                message_id,
            }),
        });
    }

    let msg = update.message?;
    let text = msg.text?;
    let user = msg.from?;
    if user.is_bot || !is_allowed(&user, allowed_users) {
        return None;
    }

    let is_group = msg.chat.is_group();
    let text = if is_group {
        match group_text(&text, bot_username) {
            Some(t) => t,
            None => {
                debug!("telegram: ignoring group message from chat {}", msg.chat.id);
                return None;
            }
        }
    } else {
        text
    };

    Some(IncomingMessage {
        id: Uuid::new_v4(),
        channel: "telegram".to_string(),
        sender_id: user.id.to_string(),
        sender_name: Some(user.display_name()),
        text,
        timestamp: chrono::Utc::now(),
        reply_target: Some(msg.chat.id.to_string()),
        is_group,
        callback: None,
    })
}

fn is_allowed(user: &TgUser, allowed_users: &[i64]) -> bool {
    if !allowed_users.is_empty() && !allowed_users.contains(&user.id) {
        warn!("ignoring event from unauthorized user {}", user.id);
        return false;
    }
    true
}

/// Decide what a group message means to the bot.
///
/// Commands pass through unless addressed to another bot (`/top@other_bot`).
/// A leading mention of the bot turns the rest of the message into a
/// title search. Everything else is ignored.
pub(super) fn group_text(text: &str, bot_username: Option<&str>) -> Option<String> {
    let text = text.trim();

    if text.starts_with('/') {
        let first = text.split_whitespace().next().unwrap_or(text);
        return match (first.split_once('@'), bot_username) {
            (Some((_, target)), Some(me)) if !target.eq_ignore_ascii_case(me) => None,
            _ => Some(text.to_string()),
        };
    }

    let me = bot_username?;
    let rest = text.strip_prefix('@')?;
    if rest.len() < me.len() || !rest.is_char_boundary(me.len()) {
        return None;
    }
    let (mention, rest) = rest.split_at(me.len());
    let ends_mention =
        rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c == ',' || c == ':');
    if !mention.eq_ignore_ascii_case(me) || !ends_mention {
        return None;
    }
    let rest = rest.trim_start_matches([',', ':']).trim();
    if rest.is_empty() {
        None
    } else if rest.starts_with('/') {
        Some(rest.to_string())
    } else {
        Some(format!("/anime {rest}"))
    }
}
