//! Engine errors.
//!
//! Every fallible operation returns `Result<T, EngineError>`. Precondition
//! failures are reported before any state is touched, so an `Err` from
//! `play`, `buy` or `respond` means nothing changed.

use thiserror::Error;

use crate::cards::{CardId, CardSelector};
use crate::choice::QuestionKind;
use crate::core::PlayerId;
use crate::turn::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot {action} during the {phase:?} phase")]
    IllegalPhaseTransition { phase: Phase, action: &'static str },

    #[error("it is not {0}'s turn")]
    NotPlayersTurn(PlayerId),

    #[error("{selector} is not owned by {player}")]
    CardNotOwned { selector: CardSelector, player: PlayerId },

    #[error("{0} is not in hand")]
    CardNotInHand(CardSelector),

    #[error("{0} is neither an action nor a treasure")]
    NotPlayable(CardId),

    #[error("{0} is an action card, and there are no more actions available")]
    NoActionsAvailable(CardId),

    #[error("no more buys available")]
    NoBuysAvailable,

    #[error("{0} is not available in the supply")]
    CardUnavailableInSupply(CardId),

    #[error("{kind} costs {cost} but only {available} coins are available")]
    InsufficientFunds { kind: CardId, cost: u32, available: u32 },

    #[error("{0} cannot be bought right now")]
    PurchaseNotEligible(CardId),

    #[error("cannot respond unless waiting for an answer")]
    NotWaitingForAnswer,

    #[error("a question is already pending")]
    QuestionPending,

    #[error("unknown question kind {0:?}")]
    UnknownQuestionKind(String),

    #[error("expected a {expected:?} answer, got {got:?}")]
    AnswerMismatch { expected: QuestionKind, got: QuestionKind },

    #[error("card effect failed: {0}")]
    EffectFailed(String),
}

impl EngineError {
    /// Shorthand for a phase precondition failure.
    #[must_use]
    pub fn illegal_phase(phase: Phase, action: &'static str) -> Self {
        EngineError::IllegalPhaseTransition { phase, action }
    }
}
