//! Per-event handling: route to a handler, then deliver the reply.

use super::Gateway;
use crate::callbacks::{self, Callback};
use crate::commands::{self, Command, CommandContext, Reply};
use animebot_core::{
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use tracing::{debug, error, info, warn};

impl Gateway {
    /// Handle one event end to end. Handler errors are logged and the user
    /// gets no reply.
    pub(super) async fn dispatch(&self, incoming: IncomingMessage) {
        let Some(channel) = self.channels.get(&incoming.channel).cloned() else {
            warn!("event from unknown channel {}", incoming.channel);
            return;
        };

        let ctx = CommandContext {
            catalog: self.catalog.as_ref(),
            translator: self.translator.as_ref(),
            store: &self.store,
            sender_id: &incoming.sender_id,
            text: &incoming.text,
            lang: &self.lang,
            list_limit: self.list_limit,
        };

        let result = match incoming.callback {
            Some(ref cb) => {
                let Some(parsed) = Callback::parse(&incoming.text) else {
                    debug!("ignoring unknown button payload '{}'", incoming.text);
                    if let Err(e) = channel.answer_callback(&cb.query_id, None).await {
                        warn!("failed to answer callback: {e}");
                    }
                    return;
                };
                info!("[{}] {} pressed {}", incoming.channel, incoming.sender_id, incoming.text);
                callbacks::handle(parsed, &ctx).await
            }
            None => {
                let Some(cmd) = Command::parse(&incoming.text) else {
                    debug!("ignoring non-command text from {}", incoming.sender_id);
                    return;
                };
                info!("[{}] {} sent {:?}", incoming.channel, incoming.sender_id, cmd);
                if let Some(ref target) = incoming.reply_target {
                    if let Err(e) = channel.send_typing(target).await {
                        debug!("typing indicator failed: {e}");
                    }
                }
                commands::handle(cmd, &ctx).await
            }
        };

        // A pressed button spins until answered, even when the handler failed.
        if let Some(ref cb) = incoming.callback {
            let toast = match result {
                Ok(Reply::Toast(ref text)) => Some(text.as_str()),
                _ => None,
            };
            if let Err(e) = channel.answer_callback(&cb.query_id, toast).await {
                warn!("failed to answer callback: {e}");
            }
        }

        match result {
            Ok(reply) => self.deliver(channel.as_ref(), &incoming, reply).await,
            Err(e) => error!(
                "handler for '{}' from {} failed: {e}",
                incoming.text, incoming.sender_id
            ),
        }
    }

    /// Send, edit, or (for commands) post a toast as a plain message.
    pub(super) async fn deliver(
        &self,
        channel: &dyn Channel,
        incoming: &IncomingMessage,
        reply: Reply,
    ) {
        let Some(target) = incoming.reply_target.clone() else {
            warn!("no reply target for event {}", incoming.id);
            return;
        };

        let result = match reply {
            Reply::Send(msg) => channel.send(msg.to(target)).await,
            Reply::Edit(msg) => {
                let msg = msg.to(target);
                let message_id = incoming
                    .callback
                    .as_ref()
                    .and_then(|cb| cb.message_id.as_deref());
                match message_id {
                    Some(id) => match channel.edit(id, msg.clone()).await {
                        Ok(()) => Ok(()),
                        Err(e) => {
                            warn!("edit failed, sending a new message instead: {e}");
                            channel.send(msg).await
                        }
                    },
                    None => channel.send(msg).await,
                }
            }
            // Already shown by answer_callback.
            Reply::Toast(_) if incoming.is_callback() => Ok(()),
            Reply::Toast(text) => channel.send(OutgoingMessage::text(text).to(target)).await,
        };

        if let Err(e) = result {
            error!("failed to deliver reply via {}: {e}", channel.name());
        }
    }
}
