//! # deckturn
//!
//! A per-player turn engine for deck-building card games.
//!
//! ## Design Principles
//!
//! 1. **Cards Move by Value**: a `Card` is owned by exactly one zone (or the
//!    supply, or the trash) at a time. Moving it is a move of the value, so
//!    pure zone moves can never duplicate or lose a card.
//!
//! 2. **Validate, Then Act**: `play`, `buy` and `respond` check every
//!    precondition before touching state. An error means nothing changed.
//!
//! 3. **Collaborators Behind Traits**: turn order, the supply and the trash
//!    are reached only through [`Table`], so games own those however they
//!    like.
//!
//! ## Turn Flow
//!
//! `start_turn` moves a player from `Setup` to `Action`. Playing a treasure
//! moves to `Treasure`, the first purchase to `Buy`, and `end_turn` runs
//! `Cleanup`, draws a new hand and passes the turn. Card effects that need a
//! decision ask a question and are resumed with the answer.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, seats, RNG, configuration
//! - `cards`: Card definitions, instances, selectors and effect hooks
//! - `zones`: A player's seven card zones
//! - `turn`: Phase machine and resource ledger
//! - `choice`: Questions, answers and strategies
//! - `engine`: The `Player` and its turn operations
//! - `table`: Traits for the turn coordinator, supply and trash
//! - `games`: A playable base set built on the engine

pub mod core;
pub mod cards;
pub mod zones;
pub mod turn;
pub mod choice;
pub mod engine;
pub mod table;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EntityAllocator, EntityId, GameConfig, GameRng, PlayerId, PlayerMap, TurnConfig,
};

pub use crate::cards::{
    Card, CardDefinition, CardEffect, CardId, CardRef, CardRegistry, CardSelector, CardType, Vanilla,
};

pub use crate::zones::{Zone, ZoneManager, ZonePosition};

pub use crate::turn::{Activity, Phase, PhaseMachine, ResourceLedger};

pub use crate::choice::{
    Answer, ChoiceOptions, Continuation, PlayOptions, Question, QuestionKind, Responder, Strategy,
};

pub use crate::engine::Player;

pub use crate::table::{Supply, Table, TrashPile, TurnCoordinator};

pub use crate::error::EngineError;
