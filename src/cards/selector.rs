//! Card addressing.
//!
//! Callers refer to "a card" either by identity or by kind. A kind
//! selector means "whichever card of this kind is first in hand". The
//! single lookup that resolves selectors lives in
//! [`ZoneManager::find_in_hand`](crate::zones::ZoneManager::find_in_hand)
//! and is shared by `play`, `trash` and `respond`.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use super::instance::{Card, CardRef};
use crate::core::entity::EntityId;

/// A reference to a card by identity or by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSelector {
    /// This exact card.
    Instance(EntityId),
    /// Any card of this kind.
    Kind(CardId),
}

impl CardSelector {
    /// Does `card` satisfy this selector?
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match *self {
            CardSelector::Instance(entity) => card.entity() == entity,
            CardSelector::Kind(kind) => card.kind() == kind,
        }
    }

    /// The kind, if this is a kind selector.
    #[must_use]
    pub fn kind(&self) -> Option<CardId> {
        match *self {
            CardSelector::Kind(kind) => Some(kind),
            CardSelector::Instance(_) => None,
        }
    }
}

impl From<EntityId> for CardSelector {
    fn from(entity: EntityId) -> Self {
        CardSelector::Instance(entity)
    }
}

impl From<CardId> for CardSelector {
    fn from(kind: CardId) -> Self {
        CardSelector::Kind(kind)
    }
}

impl From<CardRef> for CardSelector {
    fn from(card: CardRef) -> Self {
        CardSelector::Instance(card.entity)
    }
}

impl std::fmt::Display for CardSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSelector::Instance(entity) => write!(f, "{}", entity),
            CardSelector::Kind(kind) => write!(f, "any {}", kind),
        }
    }
}
