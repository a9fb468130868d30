use thiserror::Error;

/// Top-level error type for animebot.
#[derive(Debug, Error)]
pub enum AnimeBotError {
    /// Error talking to the anime catalog.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Error from the translation service.
    #[error("translation error: {0}")]
    Translation(String),

    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// User-data store error.
    #[error("memory error: {0}")]
    Memory(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
