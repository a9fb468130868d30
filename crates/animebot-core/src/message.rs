use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An incoming event from a channel: a text message or a button press.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel name (e.g. "telegram").
    pub channel: String,
    /// Platform-specific user ID.
    pub sender_id: String,
    /// Human-readable sender name.
    pub sender_name: Option<String>,
    /// Message text, or the button payload for callbacks.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Platform-specific target for routing the response (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
    /// Whether this message comes from a group chat.
    #[serde(default)]
    pub is_group: bool,
    /// Set when the event is a button press rather than a typed message.
    #[serde(default)]
    pub callback: Option<CallbackQuery>,
}

impl IncomingMessage {
    pub fn is_callback(&self) -> bool {
        self.callback.is_some()
    }
}

/// A button press on one of the bot's own messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    /// Platform id used to acknowledge the press.
    pub query_id: String,
    /// The message carrying the pressed button, if still accessible.
    pub message_id: Option<String>,
}

/// How the text of an outgoing message should be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextFormat {
    #[default]
    Markdown,
    Html,
    Plain,
}

/// One inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    /// Pressing sends `data` back to the bot.
    Callback { label: String, data: String },
    /// Pressing opens `url`.
    Url { label: String, url: String },
}

impl Button {
    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Callback {
            label: label.into(),
            data: data.into(),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Url {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Callback { label, .. } | Self::Url { label, .. } => label,
        }
    }

    /// Callback payload, `None` for URL buttons.
    pub fn data(&self) -> Option<&str> {
        match self {
            Self::Callback { data, .. } => Some(data),
            Self::Url { .. } => None,
        }
    }
}

/// An outgoing message to send back through a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Message text, or the caption when `photo_url` is set.
    pub text: String,
    #[serde(default)]
    pub format: TextFormat,
    /// When set the message is sent as a photo with `text` as caption.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Inline keyboard, one inner vec per row.
    #[serde(default)]
    pub keyboard: Vec<Vec<Button>>,
    /// Platform-specific target for routing (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    pub fn with_keyboard(mut self, keyboard: Vec<Vec<Button>>) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn to(mut self, target: impl Into<String>) -> Self {
        self.reply_target = Some(target.into());
        self
    }
}
