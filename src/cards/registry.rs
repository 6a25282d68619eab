//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every kind a game knows about and stamps out
//! `Card` instances that share the kind's definition.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use super::instance::Card;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deckturn::cards::{CardDefinition, CardId, CardRegistry, CardType};
/// use deckturn::core::EntityId;
///
/// let mut registry = CardRegistry::new();
/// registry.register(
///     CardDefinition::new(CardId::new(2), "Silver")
///         .with_type(CardType::Treasure)
///         .with_cost(3)
///         .with_coins(2),
/// );
///
/// let silver = registry.instantiate(CardId::new(2), EntityId(40), None).unwrap();
/// assert_eq!(silver.coins(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, Arc::new(card));
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&id)
    }

    /// Create a new instance of `id`, or `None` if the kind is unknown.
    #[must_use]
    pub fn instantiate(&self, id: CardId, entity: EntityId, owner: Option<PlayerId>) -> Option<Card> {
        self.cards
            .get(&id)
            .map(|def| Card::new(entity, Arc::clone(def), owner))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }
}
