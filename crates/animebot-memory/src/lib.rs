//! # animebot-memory
//!
//! Persistent per-user lists (favorites, watchlist, completed, dropped)
//! kept in a single JSON document.

pub mod store;

pub use store::{FavoriteOutcome, Store, UserData, UserListState};
