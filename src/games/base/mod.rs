//! A small base-set deck-builder for exercising the engine end to end.
//!
//! - Basic treasures, victory cards and curses
//! - A kingdom of simple actions, some of which ask questions
//! - `BaseTable`: supply, trash and turn order
//! - `BigMoney` and `Passive` strategies
//!
//! Supports 1-6 players.

pub mod cards;
mod game;
mod strategy;
mod table;

pub use game::{BaseGame, BaseGameBuilder, GameSummary};
pub use strategy::{BigMoney, Passive};
pub use table::BaseTable;
