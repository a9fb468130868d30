//! Chat commands and the handlers behind them.

pub(crate) mod details;
mod listings;
pub(crate) mod profile;
pub(crate) mod schedule;
mod search;


use crate::i18n::t;
use animebot_core::{
    error::AnimeBotError,
    message::{OutgoingMessage, TextFormat},
    traits::{Catalog, Translator},
};
use animebot_memory::Store;

/// Grouped context for one command or button press.
pub struct CommandContext<'a> {
    pub catalog: &'a dyn Catalog,
    pub translator: &'a dyn Translator,
    pub store: &'a Store,
    pub sender_id: &'a str,
    /// Full message text (or callback payload).
    pub text: &'a str,
    pub lang: &'a str,
    /// Maximum entries in top / season / similar lists.
    pub list_limit: usize,
}

/// What the gateway should do with a handler's result.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Post a new message.
    Send(OutgoingMessage),
    /// Replace the message carrying the pressed button (falls back to `Send`).
    Edit(OutgoingMessage),
    /// Short notification shown on the pressed button.
    Toast(String),
}

impl Reply {
    /// Plain text in the default Markdown format.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Send(OutgoingMessage::text(text))
    }

    /// Turn a `Send` into an `Edit` of the originating message.
    pub fn into_edit(self) -> Self {
        match self {
            Self::Send(msg) => Self::Edit(msg),
            other => other,
        }
    }
}

/// Known bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Anime,
    Season,
    Character,
    Top,
    Random,
    Planning,
    Profile,
}

impl Command {
    /// Parse a command from message text. Returns `None` for unknown
    /// commands and plain text.
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        // Strip @botname suffix (e.g. "/top@anime_bot" → "/top").
        let cmd = first.split('@').next().unwrap_or(first);
        match cmd.to_lowercase().as_str() {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/anime" | "/recherche" => Some(Self::Anime),
            "/saison" => Some(Self::Season),
            "/personnage" => Some(Self::Character),
            "/top" => Some(Self::Top),
            "/random" => Some(Self::Random),
            "/planing" => Some(Self::Planning),
            "/profil" => Some(Self::Profile),
            _ => None,
        }
    }
}

/// Everything after the command word, trimmed.
pub fn args(text: &str) -> &str {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(pos) => text[pos..].trim(),
        None => "",
    }
}

/// Handle a command and return the reply.
///
/// Catalog and translation problems become user-facing text; only storage
/// errors are returned as `Err`.
pub async fn handle(cmd: Command, ctx: &CommandContext<'_>) -> Result<Reply, AnimeBotError> {
    let lang = ctx.lang;
    Ok(match cmd {
        Command::Start => Reply::Send(
            OutgoingMessage::text(t("welcome", lang)).with_format(TextFormat::Plain),
        ),
        Command::Help => {
            Reply::Send(OutgoingMessage::text(t("help", lang)).with_format(TextFormat::Html))
        }
        Command::Anime => search::anime(ctx, args(ctx.text)).await,
        Command::Character => search::character(ctx, args(ctx.text)).await,
        Command::Season => listings::season(ctx, args(ctx.text)).await,
        Command::Top => listings::top(ctx).await,
        Command::Random => listings::random(ctx).await,
        Command::Planning => schedule::week(ctx).await,
        Command::Profile => return profile::show(ctx).await,
    })
}
