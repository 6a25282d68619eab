//! Card system: definitions, instances, selectors, effect hooks, registry.
//!
//! ## Key Types
//!
//! - `CardId`: identifies a card kind ("Village")
//! - `CardDefinition`: static stats of a kind plus its `CardEffect`
//! - `Card`: one physical card, moved by value between zones
//! - `CardRef`: copyable (instance, kind) handle used in hooks and answers
//! - `CardSelector`: "this instance" or "any card of this kind in hand"
//! - `CardRegistry`: kind lookup and instantiation
//!
//! `Card` is deliberately not `Clone`: a card lives in exactly one zone and
//! moving it is a move of the value.

pub mod definition;
pub mod effect;
pub mod instance;
pub mod registry;
pub mod selector;

pub use definition::{CardDefinition, CardId, CardType};
pub use effect::{CardEffect, Vanilla};
pub use instance::{Card, CardRef};
pub use registry::CardRegistry;
pub use selector::CardSelector;
