mod channels;
mod defaults;


pub use channels::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AnimeBotError;
use defaults::*;

/// Top-level animebot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Interface language code ("fr" or "en").
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            language: default_language(),
            log_level: default_log_level(),
        }
    }
}

/// External anime catalog (Jikan).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,
    /// How many entries ranked listings (top, season) show.
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_base_url(),
            list_limit: default_list_limit(),
        }
    }
}

/// Translation of synopses, studio names and character bios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_translation_base_url")]
    pub base_url: String,
    /// Target language code. Source is always auto-detected.
    #[serde(default = "default_translation_target")]
    pub target: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_translation_base_url(),
            target: default_translation_target(),
        }
    }
}

/// Per-user list storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Config {
    /// Replace the bot token with `token` when it is set and non-empty.
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.telegram.bot_token = token.trim().to_string();
        }
        self
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file, then apply the `TELEGRAM_TOKEN`
/// environment override.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, AnimeBotError> {
    let config = load_file(path)?;
    Ok(config.with_token_override(std::env::var(TOKEN_ENV_VAR).ok()))
}

fn load_file(path: &str) -> Result<Config, AnimeBotError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| AnimeBotError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| AnimeBotError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
