//! Card instances - runtime card state.
//!
//! `Card` is one physical card. It owns a shared handle to its kind's
//! definition plus mutable per-instance state (counters an effect may
//! track while the card is in play).
//!
//! ## State Values (i64 only)
//!
//! The `state` map uses `FxHashMap<String, i64>`; store booleans as 0/1.
//! Cleanup clears it by default.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// Copyable handle to a card instance: identity plus kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRef {
    pub entity: EntityId,
    pub kind: CardId,
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.kind, self.entity.0)
    }
}

/// A physical card.
pub struct Card {
    entity: EntityId,

    /// Owning seat. `None` while the card sits in the supply or trash.
    pub owner: Option<PlayerId>,

    definition: Arc<CardDefinition>,

    state: FxHashMap<String, i64>,
}

impl Card {
    /// Create a card instance.
    #[must_use]
    pub fn new(entity: EntityId, definition: Arc<CardDefinition>, owner: Option<PlayerId>) -> Self {
        Self {
            entity,
            owner,
            definition,
            state: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    #[must_use]
    pub fn kind(&self) -> CardId {
        self.definition.id
    }

    #[must_use]
    pub fn card_ref(&self) -> CardRef {
        CardRef {
            entity: self.entity,
            kind: self.kind(),
        }
    }

    #[must_use]
    pub fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.definition.cost
    }

    #[must_use]
    pub fn vp(&self) -> i32 {
        self.definition.vp
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.definition.is_action()
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        self.definition.is_treasure()
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.definition.is_victory()
    }

    /// Cards drawn when played.
    #[must_use]
    pub fn cards(&self) -> u32 {
        self.definition.cards
    }

    #[must_use]
    pub fn actions(&self) -> u32 {
        self.definition.actions
    }

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.definition.coins
    }

    #[must_use]
    pub fn buys(&self) -> u32 {
        self.definition.buys
    }

    /// Get a state value with a default.
    #[must_use]
    pub fn get_state(&self, key: &str, default: i64) -> i64 {
        self.state.get(key).copied().unwrap_or(default)
    }

    /// Set a state value.
    pub fn set_state(&mut self, key: impl Into<String>, value: i64) {
        self.state.insert(key.into(), value);
    }

    /// Modify a state value by delta.
    pub fn modify_state(&mut self, key: &str, delta: i64) {
        let current = self.get_state(key, 0);
        self.state.insert(key.to_string(), current + delta);
    }

    /// Clear all state.
    pub fn clear_state(&mut self) {
        self.state.clear();
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("entity", &self.entity)
            .field("name", &self.definition.name)
            .field("owner", &self.owner)
            .finish()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.definition.name)
    }
}
