//! The per-player turn engine.
//!
//! A [`Player`] owns its zones, resources and phase machine, and runs
//! every turn operation against a shared [`Table`](crate::table::Table):
//!
//! - `player.rs`: state, turn lifecycle and queries
//! - `resolution.rs`: play, buy, gain and trash
//! - `protocol.rs`: questions raised by card effects

mod player;
mod protocol;
mod resolution;

pub use player::Player;
