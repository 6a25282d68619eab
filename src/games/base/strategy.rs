//! Built-in decision makers.

use crate::cards::{CardRef, CardSelector};
use crate::choice::{Question, Strategy};
use crate::engine::Player;

use super::cards::{CURSE, ESTATE, SILVER};

/// Money-first play: accepts every offer, gets rid of junk, gains Silver.
#[derive(Clone, Copy, Debug, Default)]
pub struct BigMoney;

impl Strategy for BigMoney {
    fn on_ask(&self, _player: &Player, _card: Option<CardRef>, _prompt: &str, _question: &Question) -> bool {
        true
    }

    fn on_choose_card(
        &self,
        _player: &Player,
        _card: Option<CardRef>,
        _prompt: &str,
        _question: &Question,
    ) -> Option<CardSelector> {
        Some(CardSelector::Kind(SILVER))
    }

    /// Curses and Estates in hand.
    fn on_choose_cards(
        &self,
        player: &Player,
        _card: Option<CardRef>,
        _prompt: &str,
        _question: &Question,
    ) -> Vec<CardSelector> {
        player
            .hand()
            .iter()
            .filter(|c| c.kind() == CURSE || c.kind() == ESTATE)
            .map(|c| CardSelector::Instance(c.entity()))
            .collect()
    }
}

/// Declines everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passive;

impl Strategy for Passive {
    fn on_ask(&self, _player: &Player, _card: Option<CardRef>, _prompt: &str, _question: &Question) -> bool {
        false
    }

    fn on_choose_card(
        &self,
        _player: &Player,
        _card: Option<CardRef>,
        _prompt: &str,
        _question: &Question,
    ) -> Option<CardSelector> {
        None
    }

    fn on_choose_cards(
        &self,
        _player: &Player,
        _card: Option<CardRef>,
        _prompt: &str,
        _question: &Question,
    ) -> Vec<CardSelector> {
        Vec::new()
    }
}
