//! Zone manager for a player's cards.
//!
//! The `ZoneManager` owns every `Card` a player has, split into zones.
//! Cards move between zones by value, so a card can never be in two zones
//! at once and pure moves never change the total count.
//!
//! Deck order: index 0 is the bottom, the last element is the top.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRef, CardSelector};
use crate::core::entity::EntityId;
use crate::core::rng::GameRng;

/// One of a player's card collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Discard,
    Hand,
    ActionsInPlay,
    TreasuresInPlay,
    /// Durations resolving on the owner's next turn.
    DurationFirstTurn,
    /// Durations resolving on the turn after that.
    DurationSecondTurn,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::Deck,
        Zone::Discard,
        Zone::Hand,
        Zone::ActionsInPlay,
        Zone::TreasuresInPlay,
        Zone::DurationFirstTurn,
        Zone::DurationSecondTurn,
    ];

    /// The four zones that make up "cards in play".
    pub const IN_PLAY: [Zone; 4] = [
        Zone::ActionsInPlay,
        Zone::TreasuresInPlay,
        Zone::DurationFirstTurn,
        Zone::DurationSecondTurn,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Add to top of zone (e.g., top of deck).
    #[default]
    Top,
    /// Add to bottom of zone.
    Bottom,
    /// Insert at specific index (0 = bottom).
    Index(usize),
}

/// Owns a player's zones and the RNG used to reshuffle them.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use deckturn::cards::{Card, CardDefinition, CardId};
/// use deckturn::core::{EntityId, GameRng};
/// use deckturn::zones::{Zone, ZoneManager, ZonePosition};
///
/// let copper = Arc::new(CardDefinition::new(CardId::new(1), "Copper"));
/// let mut zones = ZoneManager::new(GameRng::new(1));
/// for i in 0..3 {
///     zones.add(Card::new(EntityId(i), Arc::clone(&copper), None), Zone::Discard, None);
/// }
///
/// // Empty deck: drawing reshuffles the discard pile first.
/// let drawn = zones.draw(5);
/// assert_eq!(drawn.len(), 3);
/// assert_eq!(zones.len(Zone::Hand), 3);
/// assert!(zones.is_empty(Zone::Discard));
/// ```
#[derive(Debug)]
pub struct ZoneManager {
    zones: [Vec<Card>; 7],
    rng: GameRng,
}

impl ZoneManager {
    /// Create empty zones shuffled by `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            zones: Default::default(),
            rng,
        }
    }

    /// Cards in a zone, bottom first.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[Card] {
        &self.zones[zone.index()]
    }

    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.zones[zone.index()].len()
    }

    #[must_use]
    pub fn is_empty(&self, zone: Zone) -> bool {
        self.zones[zone.index()].is_empty()
    }

    /// Top card of a zone (last in the vec).
    #[must_use]
    pub fn top(&self, zone: Zone) -> Option<&Card> {
        self.zones[zone.index()].last()
    }

    /// Add a card to a zone. `None` means top.
    pub fn add(&mut self, card: Card, zone: Zone, position: Option<ZonePosition>) {
        let order = &mut self.zones[zone.index()];
        match position.unwrap_or_default() {
            ZonePosition::Top => order.push(card),
            ZonePosition::Bottom => order.insert(0, card),
            ZonePosition::Index(i) => {
                let idx = i.min(order.len());
                order.insert(idx, card);
            }
        }
    }

    /// Remove the first card matching `selector` from `zone`.
    pub fn take(&mut self, zone: Zone, selector: CardSelector) -> Option<Card> {
        let order = &mut self.zones[zone.index()];
        let pos = order.iter().position(|c| selector.matches(c))?;
        Some(order.remove(pos))
    }

    /// Empty `zone`, handing back its cards bottom first.
    pub fn clear(&mut self, zone: Zone) -> Vec<Card> {
        std::mem::take(&mut self.zones[zone.index()])
    }

    /// Move a card between zones. Returns `None` if it was not in `from`.
    pub fn move_card(
        &mut self,
        selector: CardSelector,
        from: Zone,
        to: Zone,
        position: Option<ZonePosition>,
    ) -> Option<CardRef> {
        let card = self.take(from, selector)?;
        let moved = card.card_ref();
        self.add(card, to, position);
        Some(moved)
    }

    /// Resolve a selector against the hand.
    ///
    /// An instance selector matches only that card; a kind selector
    /// matches the first card of that kind in hand order.
    #[must_use]
    pub fn find_in_hand(&self, selector: CardSelector) -> Option<&Card> {
        self.find_in_hand_excluding(selector, &[])
    }

    /// Like [`find_in_hand`](Self::find_in_hand), skipping cards already picked.
    #[must_use]
    pub fn find_in_hand_excluding(&self, selector: CardSelector, picked: &[EntityId]) -> Option<&Card> {
        self.cards(Zone::Hand)
            .iter()
            .find(|c| selector.matches(c) && !picked.contains(&c.entity()))
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self) {
        self.rng.shuffle(&mut self.zones[Zone::Deck.index()]);
    }

    /// Move the whole discard pile onto the deck and shuffle the deck.
    ///
    /// Returns how many cards were moved.
    pub fn reshuffle(&mut self) -> usize {
        let discard = std::mem::take(&mut self.zones[Zone::Discard.index()]);
        let moved = discard.len();
        self.zones[Zone::Deck.index()].extend(discard);
        self.shuffle_deck();
        debug!("reshuffled {} cards into deck", moved);
        moved
    }

    /// Draw one card from the top of the deck into hand.
    ///
    /// Reshuffles first if the deck is empty. Returns `None` when both
    /// deck and discard are empty.
    pub fn draw_one(&mut self) -> Option<CardRef> {
        if self.is_empty(Zone::Deck) {
            self.reshuffle();
        }
        let card = self.zones[Zone::Deck.index()].pop()?;
        let drawn = card.card_ref();
        self.zones[Zone::Hand.index()].push(card);
        Some(drawn)
    }

    /// Draw up to `count` cards. Best-effort: returns the cards actually
    /// drawn, which may be fewer than requested.
    pub fn draw(&mut self, count: usize) -> Vec<CardRef> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw_one() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// End-of-turn cleanup of actions-in-play, treasures-in-play and hand.
    ///
    /// Each card's cleanup hook runs, then the three zones are emptied into
    /// the discard pile in that order. Returns how many cards moved.
    pub fn cleanup(&mut self) -> usize {
        let mut moved = 0;
        for zone in [Zone::ActionsInPlay, Zone::TreasuresInPlay, Zone::Hand] {
            let cards = std::mem::take(&mut self.zones[zone.index()]);
            moved += cards.len();
            for mut card in cards {
                let effect = std::sync::Arc::clone(&card.definition().effect);
                effect.on_cleanup(&mut card);
                self.zones[Zone::Discard.index()].push(card);
            }
        }
        moved
    }

    /// Every card in the four in-play zones.
    pub fn in_play(&self) -> impl Iterator<Item = &Card> {
        Zone::IN_PLAY.into_iter().flat_map(move |z| self.cards(z).iter())
    }

    /// Every card the player owns, across all zones.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.zones.iter().flatten()
    }

    /// Total number of cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.zones.iter().map(Vec::len).sum()
    }
}
