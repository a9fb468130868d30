mod callbacks;
mod commands;
mod gateway;
mod i18n;
mod render;

use animebot_catalog::{GoogleTranslator, JikanClient, NoopTranslator};
use animebot_channels::telegram::TelegramChannel;
use animebot_core::{
    catalog::Lookup,
    config::{self, shellexpand, Config},
    traits::{Catalog, Channel, Translator},
};
use animebot_memory::Store;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "animebot",
    version,
    about = "Anime catalog bot for Telegram, backed by Jikan"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Show the configuration summary and check the catalog.
    Status,
    /// Look up one anime and print its card.
    Search {
        /// Title to search for.
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env is normal; the token may come from the real environment.
    dotenvy::dotenv().ok();
    let cfg = config::load(&cli.config)?;

    match cli.command {
        Commands::Start => {
            let _guard = init_logging(&cfg, true)?;

            if !cfg.telegram.enabled {
                anyhow::bail!("Telegram is disabled. Enable [telegram] in {}.", cli.config);
            }
            if cfg.telegram.bot_token.is_empty() {
                anyhow::bail!(
                    "Telegram bot_token is empty. \
                     Set it in {} or the TELEGRAM_TOKEN env var.",
                    cli.config
                );
            }

            let lang = cfg.bot.language.clone();
            let telegram = TelegramChannel::new(cfg.telegram.clone())
                .with_commands(i18n::command_menu(&lang));
            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
            channels.insert("telegram".to_string(), Arc::new(telegram));

            let catalog: Arc<dyn Catalog> = Arc::new(JikanClient::from_config(&cfg.catalog));
            let translator = build_translator(&cfg);
            let store = Store::new(&cfg.store).await?;

            info!("{} starting (language: {lang})", cfg.bot.name);
            let gw = Arc::new(gateway::Gateway::new(
                channels,
                catalog,
                translator,
                store,
                lang,
                cfg.catalog.list_limit,
            ));
            gw.run().await?;
        }
        Commands::Status => {
            let _guard = init_logging(&cfg, false)?;
            println!("animebot status\n");
            println!("Config: {}", cli.config);
            println!("Language: {}", cfg.bot.language);
            println!();

            let catalog = JikanClient::from_config(&cfg.catalog);
            println!(
                "  catalog ({}): {}",
                cfg.catalog.base_url,
                if catalog.is_available().await {
                    "reachable"
                } else {
                    "unreachable"
                }
            );
            println!(
                "  translation: {}",
                if cfg.translation.enabled {
                    format!("enabled (target: {})", cfg.translation.target)
                } else {
                    "disabled".to_string()
                }
            );
            println!(
                "  telegram: {}",
                if cfg.telegram.enabled && !cfg.telegram.bot_token.is_empty() {
                    "configured"
                } else if cfg.telegram.enabled {
                    "enabled but missing bot_token"
                } else {
                    "disabled"
                }
            );

            let store_path = shellexpand(&cfg.store.path);
            if PathBuf::from(&store_path).exists() {
                let store = Store::open(&store_path).await?;
                println!("  store: {store_path} ({} users)", store.load().await?.len());
            } else {
                println!("  store: {store_path} (not created yet)");
            }
        }
        Commands::Search { query } => {
            let _guard = init_logging(&cfg, false)?;
            if query.is_empty() {
                anyhow::bail!("no query provided. Usage: animebot search <title>");
            }
            let query = query.join(" ");
            let lang = cfg.bot.language.as_str();
            let catalog = JikanClient::from_config(&cfg.catalog);
            let translator = build_translator(&cfg);

            match catalog.search_anime(&query).await {
                Lookup::Found(anime) => {
                    let studios = anime.studio_names().join(", ");
                    let studio_text = if studios.is_empty() {
                        None
                    } else {
                        Some(
                            animebot_catalog::translate_or_original(translator.as_ref(), &studios)
                                .await,
                        )
                    };
                    let card = render::anime_card(&anime, studio_text.as_deref(), lang);
                    println!("{}", card.caption);
                    if let Some(url) = card.photo_url {
                        println!("\n{url}");
                    }
                }
                Lookup::NotFound => println!("{}", i18n::t("no_anime_found", lang)),
                Lookup::Failed(e) => anyhow::bail!("catalog request failed: {e}"),
            }
        }
    }

    Ok(())
}

/// Build the configured translator.
fn build_translator(cfg: &Config) -> Arc<dyn Translator> {
    if cfg.translation.enabled {
        Arc::new(GoogleTranslator::from_config(&cfg.translation))
    } else {
        Arc::new(NoopTranslator)
    }
}

/// Log to stderr, plus a daily file under `{data_dir}/logs` when `to_file`.
///
/// The returned guard flushes the file writer on drop.
fn init_logging(cfg: &Config, to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.bot.log_level));

    if !to_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        return Ok(None);
    }

    let log_dir = PathBuf::from(shellexpand(&cfg.bot.data_dir)).join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, "animebot.log"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();
    Ok(Some(guard))
}
