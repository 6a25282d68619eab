//! Configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `TurnConfig`: per-player setup (opening cards, hand size)
//! - `GameConfig`: table-wide setup (seats, seed, kingdom)
//!
//! Both follow the builder pattern; nothing here is interpreted until a
//! player is prepared or a table is built.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Default number of cards drawn for a fresh hand.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Per-player turn configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnConfig {
    /// Cards drawn at `prepare` and after every cleanup.
    pub hand_size: usize,

    /// Opening cards taken from the supply at `prepare`, as (kind, count).
    ///
    /// Empty means the player starts with no cards at all.
    pub starting_cards: Vec<(CardId, u32)>,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            starting_cards: Vec::new(),
        }
    }
}

impl TurnConfig {
    /// Create a config with the default hand size and no opening cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of `kind` to the opening deck.
    #[must_use]
    pub fn with_starting_cards(mut self, kind: CardId, count: u32) -> Self {
        self.starting_cards.push((kind, count));
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Total number of opening cards.
    #[must_use]
    pub fn starting_card_count(&self) -> u32 {
        self.starting_cards.iter().map(|&(_, n)| n).sum()
    }
}

/// Table-wide configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (1-255).
    pub player_count: usize,

    /// Seed for every shuffle in the game.
    pub seed: u64,

    /// Kingdom card kinds placed in the supply next to the basic piles.
    pub kingdom: Vec<CardId>,

    /// Per-player setup shared by all seats.
    pub turn: TurnConfig,
}

impl GameConfig {
    /// Create a new game configuration.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            seed: 0,
            kingdom: Vec::new(),
            turn: TurnConfig::default(),
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Add a kingdom pile.
    #[must_use]
    pub fn with_kingdom_card(mut self, kind: CardId) -> Self {
        if !self.kingdom.contains(&kind) {
            self.kingdom.push(kind);
        }
        self
    }

    /// Replace the per-player turn config.
    #[must_use]
    pub fn with_turn_config(mut self, turn: TurnConfig) -> Self {
        self.turn = turn;
        self
    }
}
