//! # animebot-channels
//!
//! Messaging platform integrations for animebot.

pub mod telegram;
pub(crate) mod utils;
