//! Card definitions - static card data.
//!
//! `CardDefinition` holds what every copy of a kind shares: name, types,
//! cost, printed victory points and the "+N" grants applied when the card
//! is played. Anything beyond the grants lives in the definition's
//! `CardEffect`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::{CardEffect, Vanilla};

/// Identifier for a card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Printed card type. A card may carry several.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Action,
    Treasure,
    Victory,
    Curse,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deckturn::cards::{CardDefinition, CardId, CardType};
///
/// let smithy = CardDefinition::new(CardId::new(11), "Smithy")
///     .with_type(CardType::Action)
///     .with_cost(4)
///     .with_cards(3);
///
/// assert!(smithy.is_action());
/// assert_eq!(smithy.cards, 3);
/// ```
#[derive(Clone)]
pub struct CardDefinition {
    /// Kind identifier.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Printed types.
    pub types: SmallVec<[CardType; 2]>,

    /// Price in coins.
    pub cost: u32,

    /// Printed victory points (negative for curses).
    pub vp: i32,

    /// Cards drawn when played as an action.
    pub cards: u32,

    /// Actions granted when played.
    pub actions: u32,

    /// Coins granted when played.
    pub coins: u32,

    /// Buys granted when played.
    pub buys: u32,

    /// Hooks beyond the plain grants.
    pub effect: Arc<dyn CardEffect>,
}

impl CardDefinition {
    /// Create a typeless, free, vanilla definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            types: SmallVec::new(),
            cost: 0,
            vp: 0,
            cards: 0,
            actions: 0,
            coins: 0,
            buys: 0,
            effect: Arc::new(Vanilla),
        }
    }

    /// Add a printed type.
    #[must_use]
    pub fn with_type(mut self, card_type: CardType) -> Self {
        if !self.types.contains(&card_type) {
            self.types.push(card_type);
        }
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_vp(mut self, vp: i32) -> Self {
        self.vp = vp;
        self
    }

    #[must_use]
    pub fn with_cards(mut self, cards: u32) -> Self {
        self.cards = cards;
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: u32) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub fn with_coins(mut self, coins: u32) -> Self {
        self.coins = coins;
        self
    }

    #[must_use]
    pub fn with_buys(mut self, buys: u32) -> Self {
        self.buys = buys;
        self
    }

    /// Attach custom hooks.
    #[must_use]
    pub fn with_effect(mut self, effect: impl CardEffect + 'static) -> Self {
        self.effect = Arc::new(effect);
        self
    }

    #[must_use]
    pub fn has_type(&self, card_type: CardType) -> bool {
        self.types.contains(&card_type)
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.has_type(CardType::Action)
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        self.has_type(CardType::Treasure)
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.has_type(CardType::Victory)
    }
}

impl std::fmt::Debug for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("types", &self.types)
            .field("cost", &self.cost)
            .field("vp", &self.vp)
            .finish_non_exhaustive()
    }
}
