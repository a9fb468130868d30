//! # animebot-core
//!
//! Core types, traits, configuration, and error handling for animebot.

pub mod catalog;
pub mod config;
pub mod error;
pub mod message;
pub mod traits;

pub use config::shellexpand;
