//! Card effect hooks.
//!
//! The engine applies a card's printed grants (+cards, +actions, +coins,
//! +buys) itself. Everything else a card does is written against
//! `CardEffect`, whose hooks receive the owning `Player` and the shared
//! `Table` so they can draw, gain, trash, grant tokens or ask questions.
//!
//! Every hook has a no-op default; vanilla cards use [`Vanilla`].

use crate::engine::Player;
use crate::error::EngineError;
use crate::table::Table;

use super::instance::{Card, CardRef};

/// Behaviour attached to a card kind.
pub trait CardEffect: Send + Sync {
    /// Runs after an action card's grants have been applied.
    fn play_action(
        &self,
        _card: CardRef,
        _player: &mut Player,
        _table: &mut dyn Table,
    ) -> Result<(), EngineError> {
        Ok(())
    }

    /// Runs after a treasure card's grants have been applied.
    fn play_treasure(
        &self,
        _card: CardRef,
        _player: &mut Player,
        _table: &mut dyn Table,
    ) -> Result<(), EngineError> {
        Ok(())
    }

    /// Runs when the card leaves the supply for a player, before it is placed.
    fn on_gain(
        &self,
        _card: CardRef,
        _player: &mut Player,
        _table: &mut dyn Table,
    ) -> Result<(), EngineError> {
        Ok(())
    }

    /// Runs after a bought card has been gained, before its cost is paid.
    fn on_buy(
        &self,
        _card: CardRef,
        _player: &mut Player,
        _table: &mut dyn Table,
    ) -> Result<(), EngineError> {
        Ok(())
    }

    /// Runs for every card leaving play or hand during cleanup.
    fn on_cleanup(&self, card: &mut Card) {
        card.clear_state();
    }

    /// Purchase eligibility for `buyer`, who does not own `card` yet.
    ///
    /// Must not mutate anything; the engine calls it from `can_buy`.
    fn can_buy(&self, _card: &Card, _buyer: &Player) -> Result<bool, EngineError> {
        Ok(true)
    }
}

/// No behaviour beyond the printed grants.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vanilla;

impl CardEffect for Vanilla {}
