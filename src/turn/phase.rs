//! Phase state machine.
//!
//! - `Setup` -> `Action` on `start_turn`
//! - `Action` -> `Treasure` when a treasure is played (one-way)
//! - `Action`/`Treasure` -> `Buy` on the first purchase
//! - `Action`/`Treasure`/`Buy` -> `Cleanup` -> `Setup` on `end_turn`
//!
//! Activity is orthogonal: any phase may be `WaitingForAnswer` while a
//! card effect has a question outstanding.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Turn phase of one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Not this player's active turn.
    #[default]
    Setup,
    Action,
    Treasure,
    Buy,
    Cleanup,
}

impl Phase {
    /// Phases in which a purchase is allowed (possibly after auto-advance).
    #[must_use]
    pub const fn allows_buy(self) -> bool {
        matches!(self, Phase::Action | Phase::Treasure | Phase::Buy)
    }
}

/// Whether a resolution is running or parked on a question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[default]
    Resolving,
    WaitingForAnswer,
}

/// Enforces legal phase and activity transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseMachine {
    phase: Phase,
    activity: Activity,
}

impl PhaseMachine {
    /// `Setup` / `Resolving`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn activity(&self) -> Activity {
        self.activity
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.activity == Activity::WaitingForAnswer
    }

    /// `Setup` -> `Action`.
    pub fn start_turn(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Setup {
            return Err(EngineError::illegal_phase(self.phase, "start a turn"));
        }
        self.phase = Phase::Action;
        Ok(())
    }

    /// `Action` -> `Treasure`; already in `Treasure` is a no-op.
    ///
    /// Returns whether the phase changed.
    pub fn enter_treasure(&mut self) -> Result<bool, EngineError> {
        match self.phase {
            Phase::Action => {
                self.phase = Phase::Treasure;
                Ok(true)
            }
            Phase::Treasure => Ok(false),
            phase => Err(EngineError::illegal_phase(phase, "play a treasure")),
        }
    }

    /// `Action` or `Treasure` -> `Buy`; already in `Buy` is a no-op.
    ///
    /// Returns whether the phase changed.
    pub fn enter_buy(&mut self) -> Result<bool, EngineError> {
        match self.phase {
            Phase::Action | Phase::Treasure => {
                self.phase = Phase::Buy;
                Ok(true)
            }
            Phase::Buy => Ok(false),
            phase => Err(EngineError::illegal_phase(phase, "buy")),
        }
    }

    /// `Action`, `Treasure` or `Buy` -> `Cleanup`.
    pub fn begin_cleanup(&mut self) -> Result<(), EngineError> {
        match self.phase {
            Phase::Action | Phase::Treasure | Phase::Buy => {
                self.phase = Phase::Cleanup;
                Ok(())
            }
            phase => Err(EngineError::illegal_phase(phase, "end the turn")),
        }
    }

    /// `Cleanup` -> `Setup`.
    pub fn finish_cleanup(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Cleanup {
            return Err(EngineError::illegal_phase(self.phase, "finish cleanup"));
        }
        self.phase = Phase::Setup;
        Ok(())
    }

    /// Park the current resolution on a question.
    pub fn suspend(&mut self) -> Result<(), EngineError> {
        if self.is_waiting() {
            return Err(EngineError::QuestionPending);
        }
        self.activity = Activity::WaitingForAnswer;
        Ok(())
    }

    /// Return to `Resolving` in the same phase.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        if !self.is_waiting() {
            return Err(EngineError::NotWaitingForAnswer);
        }
        self.activity = Activity::Resolving;
        Ok(())
    }
}
