//! Concrete games built on the turn engine.

pub mod base;
