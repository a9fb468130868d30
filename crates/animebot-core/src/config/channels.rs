use serde::{Deserialize, Serialize};

use super::defaults::default_true;

/// Environment variable that overrides `telegram.bot_token`.
pub const TOKEN_ENV_VAR: &str = "TELEGRAM_TOKEN";

/// Telegram bot config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Usually left empty in the file and supplied through `TELEGRAM_TOKEN`.
    #[serde(default)]
    pub bot_token: String,
    /// Allowed Telegram user ids. Empty = everyone.
    #[serde(default)]
    pub allowed_users: Vec<i64>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bot_token: String::new(),
            allowed_users: Vec::new(),
        }
    }
}
