//! Gateway: the main event loop connecting channels to the command handlers.

mod dispatch;

#[cfg(test)]
mod tests;

use animebot_core::{
    message::IncomingMessage,
    traits::{Catalog, Channel, Translator},
};
use animebot_memory::Store;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Routes events from every channel to the handlers and delivers replies.
pub struct Gateway {
    pub(super) channels: HashMap<String, Arc<dyn Channel>>,
    pub(super) catalog: Arc<dyn Catalog>,
    pub(super) translator: Arc<dyn Translator>,
    pub(super) store: Store,
    /// UI language for every reply.
    pub(super) lang: String,
    pub(super) list_limit: usize,
}

impl Gateway {
    pub fn new(
        channels: HashMap<String, Arc<dyn Channel>>,
        catalog: Arc<dyn Catalog>,
        translator: Arc<dyn Translator>,
        store: Store,
        lang: String,
        list_limit: usize,
    ) -> Self {
        Self {
            channels,
            catalog,
            translator,
            store,
            lang,
            list_limit,
        }
    }

    /// Run until Ctrl-C. Each event is handled in its own task.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "animebot gateway running | catalog: {} | translator: {} | channels: {}",
            self.catalog.name(),
            self.translator.name(),
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        loop {
            tokio::select! {
                incoming = rx.recv() => {
                    let Some(incoming) = incoming else {
                        warn!("all channels closed, stopping gateway");
                        break;
                    };
                    let gw = self.clone();
                    tokio::spawn(async move {
                        gw.dispatch(incoming).await;
                    });
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        self.shutdown().await;
        Ok(())
    }

    async fn shutdown(&self) {
        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }
        info!("animebot gateway stopped");
    }
}
