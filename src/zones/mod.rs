//! Zone system for one player's cards.
//!
//! Every player owns seven ordered zones: deck, discard, hand, the two
//! in-play areas and two duration areas. The duration areas are reserved
//! for effects that persist across the owner's next turns; the engine
//! counts their cards but never fills or drains them.
//!
//! ## Key Types
//!
//! - `Zone`: which of the seven collections
//! - `ZonePosition`: where to insert into an ordered zone
//! - `ZoneManager`: owns the cards, draws, reshuffles and cleans up

pub mod manager;

pub use manager::{Zone, ZoneManager, ZonePosition};
