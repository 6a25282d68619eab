//! Turn bookkeeping leaves: the phase state machine and the resource
//! ledger. Neither knows about cards; the resolution engine drives both.

pub mod ledger;
pub mod phase;

pub use ledger::ResourceLedger;
pub use phase::{Activity, Phase, PhaseMachine};
