//! External collaborators of the turn engine.
//!
//! A player's operations reach the rest of the game only through these
//! traits: the turn coordinator (whose turn, which phase, game over), the
//! shared supply and the trash pile. Games implement all three on one
//! value and pass it as `&mut dyn Table`.
//!
//! ## Implementation Notes
//!
//! - `set_phase` is a mirror: the player's own phase machine is the
//!   authority and reports every change here.
//! - `draw_one_of` returning `None` is a normal outcome (empty pile).
//! - `peek` must not change anything.

use crate::cards::{Card, CardId};
use crate::core::PlayerId;
use crate::turn::Phase;

/// Turn order and game-level phase tracking.
pub trait TurnCoordinator {
    /// Is it `player`'s turn?
    fn is_current_player(&self, player: PlayerId) -> bool;

    /// Phase of the active player, as last reported.
    fn phase(&self) -> Phase;

    /// Record the active player's phase.
    fn set_phase(&mut self, phase: Phase);

    /// Re-evaluate end-of-game conditions.
    fn check_for_game_over(&mut self);

    /// Is the game still running?
    fn in_progress(&self) -> bool;

    /// Hand the turn to the next seat.
    fn move_to_next_player(&mut self);

    // === Convenience Methods ===

    fn is_setup_phase(&self) -> bool {
        self.phase() == Phase::Setup
    }

    fn is_action_phase(&self) -> bool {
        self.phase() == Phase::Action
    }

    fn is_treasure_phase(&self) -> bool {
        self.phase() == Phase::Treasure
    }

    fn is_buy_phase(&self) -> bool {
        self.phase() == Phase::Buy
    }
}

/// The shared pool of gainable cards.
pub trait Supply {
    /// Remove one `kind` from its pile and hand it to `owner`.
    fn draw_one_of(&mut self, kind: CardId, owner: PlayerId) -> Option<Card>;

    /// Inspect the next `kind` without removing it.
    fn peek(&self, kind: CardId) -> Option<&Card>;
}

/// Where trashed cards go.
pub trait TrashPile {
    fn trash(&mut self, card: Card);
}

/// Everything a player needs from the table.
pub trait Table: TurnCoordinator + Supply + TrashPile {}

impl<T: TurnCoordinator + Supply + TrashPile + ?Sized> Table for T {}
