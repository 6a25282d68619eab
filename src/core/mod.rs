//! Core engine types: card entity ids, player seats, RNG, configuration.
//!
//! These are the leaf building blocks shared by the zone manager, the
//! resolution engine and the reference collaborators in `games`.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;

pub use entity::{EntityAllocator, EntityId};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, TurnConfig, DEFAULT_HAND_SIZE};
