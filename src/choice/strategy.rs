//! Decision makers and per-play answer overrides.

use crate::cards::{CardRef, CardSelector};
use crate::engine::Player;
use crate::error::EngineError;
use crate::table::Table;

use super::question::{Answer, Question};

/// Answers questions when the current play did not supply an answer.
///
/// `card` is the card whose effect is asking, if any. Callbacks must
/// always return; there is no way to decline answering.
pub trait Strategy: Send + Sync {
    fn on_ask(&self, player: &Player, card: Option<CardRef>, prompt: &str, question: &Question) -> bool;

    fn on_choose_card(
        &self,
        player: &Player,
        card: Option<CardRef>,
        prompt: &str,
        question: &Question,
    ) -> Option<CardSelector>;

    fn on_choose_cards(
        &self,
        player: &Player,
        card: Option<CardRef>,
        prompt: &str,
        question: &Question,
    ) -> Vec<CardSelector>;
}

/// Inline answer callback for a single `play`.
pub type Responder = Box<dyn FnMut(&Player, Option<CardRef>, &str, &Question) -> Answer>;

/// Stored rest-of-effect, run by `respond` with the resolved answer.
pub type Continuation =
    Box<dyn FnOnce(&mut Player, &mut dyn Table, Answer) -> Result<(), EngineError>>;

/// Per-play overrides for the choice protocol.
///
/// Both are scoped to one `play` call and dropped when it returns.
#[derive(Default)]
pub struct PlayOptions {
    /// Used verbatim for every question raised during the play.
    pub answer: Option<Answer>,
    /// Consulted when there is no inline answer. It stays installed for
    /// every question of the play rather than only the first one.
    pub responder: Option<Responder>,
}

impl PlayOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<Answer>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    #[must_use]
    pub fn with_responder(
        mut self,
        responder: impl FnMut(&Player, Option<CardRef>, &str, &Question) -> Answer + 'static,
    ) -> Self {
        self.responder = Some(Box::new(responder));
        self
    }
}

impl std::fmt::Debug for PlayOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayOptions")
            .field("answer", &self.answer)
            .field("responder", &self.responder.is_some())
            .finish()
    }
}
