use crate::{
    catalog::{
        Anime, Character, CharacterRole, Lookup, Recommendation, Season, StreamingLink,
    },
    error::AnimeBotError,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;
use chrono::Weekday;

/// Anime catalog: where every reply gets its data.
///
/// Every call is a single read-only round trip. Implementations never
/// retry; a failure is reported once as [`Lookup::Failed`].
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Human-readable catalog name.
    fn name(&self) -> &str;

    /// First anime matching a free-text title query.
    async fn search_anime(&self, query: &str) -> Lookup<Anime>;

    /// Full record for one anime id.
    async fn anime(&self, id: u64) -> Lookup<Anime>;

    /// Current top-ranked anime.
    async fn top_anime(&self) -> Lookup<Vec<Anime>>;

    /// One random anime.
    async fn random_anime(&self) -> Lookup<Anime>;

    /// Anime airing in the given season.
    async fn season(&self, year: u16, season: Season) -> Lookup<Vec<Anime>>;

    /// Weekly broadcast schedule, optionally restricted to one day.
    async fn schedule(&self, day: Option<Weekday>) -> Lookup<Vec<Anime>>;

    /// First character matching a name query.
    async fn search_character(&self, query: &str) -> Lookup<Character>;

    /// Characters appearing in an anime.
    async fn anime_characters(&self, id: u64) -> Lookup<Vec<CharacterRole>>;

    /// Anime that users recommend alongside this one.
    async fn recommendations(&self, id: u64) -> Lookup<Vec<Recommendation>>;

    /// Legal streaming sites for an anime.
    async fn streaming(&self, id: u64) -> Lookup<Vec<StreamingLink>>;

    /// Check if the catalog is reachable.
    async fn is_available(&self) -> bool;
}

/// Text translation collaborator.
///
/// This is the raw call: errors surface to the caller. Handlers go through
/// a best-effort wrapper that falls back to the source text.
#[async_trait]
pub trait Translator: Send + Sync {
    fn name(&self) -> &str;

    /// Translate `text` into the configured target language.
    async fn translate(&self, text: &str) -> Result<String, AnimeBotError>;
}

/// Messaging channel.
///
/// Every messaging platform implements this trait to receive events and
/// deliver replies.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages and button presses.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, AnimeBotError>;

    /// Send a new message (text or photo with caption).
    async fn send(&self, message: OutgoingMessage) -> Result<(), AnimeBotError>;

    /// Replace the text and keyboard of a message previously sent by the bot.
    async fn edit(&self, message_id: &str, message: OutgoingMessage)
        -> Result<(), AnimeBotError>;

    /// Acknowledge a button press, optionally with a short toast.
    async fn answer_callback(
        &self,
        _query_id: &str,
        _text: Option<&str>,
    ) -> Result<(), AnimeBotError> {
        Ok(())
    }

    /// Send a typing indicator to show the bot is processing.
    async fn send_typing(&self, _target: &str) -> Result<(), AnimeBotError> {
        Ok(())
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), AnimeBotError>;
}
