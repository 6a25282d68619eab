//! Suspending an effect on a question and resuming it with the answer.
//!
//! `choose` parks the rest of the effect as a continuation, moves the
//! player to `WaitingForAnswer`, fetches an answer and hands it to
//! `respond`. Answers come from, in order: the inline answer passed to the
//! current `play`, the inline responder, then the player's strategy.

use std::sync::Arc;

use log::trace;
use smallvec::SmallVec;

use super::player::PendingQuestion;
use super::Player;
use crate::cards::CardSelector;
use crate::choice::{Answer, ChoiceOptions, Question, QuestionKind};
use crate::core::EntityId;
use crate::error::EngineError;
use crate::table::Table;

impl Player {
    /// Ask `question` and continue with `resume` once it is answered.
    ///
    /// If the answer is rejected the question is dropped, the player goes
    /// back to `Resolving` and the error is returned.
    pub fn choose(
        &mut self,
        table: &mut dyn Table,
        question: Question,
        resume: impl FnOnce(&mut Player, &mut dyn Table, Answer) -> Result<(), EngineError> + 'static,
    ) -> Result<(), EngineError> {
        self.phase.suspend()?;
        trace!("{} asked {:?}: {}", self, question.kind, question.prompt);
        self.pending = Some(PendingQuestion {
            question: question.clone(),
            resume: Box::new(resume),
        });

        let answer = self.solicit(&question);
        let result = self.respond(table, answer);
        if self.phase.is_waiting() {
            self.pending = None;
            self.phase.resume()?;
        }
        result
    }

    fn solicit(&mut self, question: &Question) -> Answer {
        if let Some(answer) = &self.inline.answer {
            return answer.clone();
        }
        if let Some(mut responder) = self.inline.responder.take() {
            let answer = responder(self, self.resolving, &question.prompt, question);
            self.inline.responder = Some(responder);
            return answer;
        }

        let strategy = Arc::clone(&self.strategy);
        let card = self.resolving;
        let prompt = question.prompt.as_str();
        match question.kind {
            QuestionKind::Bool => Answer::Bool(strategy.on_ask(self, card, prompt, question)),
            QuestionKind::Card => Answer::Card(strategy.on_choose_card(self, card, prompt, question)),
            QuestionKind::Cards => Answer::cards(strategy.on_choose_cards(self, card, prompt, question)),
        }
    }

    /// Deliver the answer to the pending question and run its continuation.
    ///
    /// Card answers to a from-hand question are resolved to specific cards
    /// in hand; several kind selectors for the same kind pick distinct
    /// cards.
    pub fn respond(&mut self, table: &mut dyn Table, answer: Answer) -> Result<(), EngineError> {
        if !self.phase.is_waiting() {
            return Err(EngineError::NotWaitingForAnswer);
        }
        let question = &self
            .pending
            .as_ref()
            .ok_or(EngineError::NotWaitingForAnswer)?
            .question;
        if answer.kind() != question.kind {
            return Err(EngineError::AnswerMismatch {
                expected: question.kind,
                got: answer.kind(),
            });
        }
        let answer = if question.resolves_from_hand() {
            self.resolve_from_hand(answer)?
        } else {
            answer
        };

        let pending = self.pending.take().ok_or(EngineError::NotWaitingForAnswer)?;
        self.phase.resume()?;
        trace!("{} answered {:?}", self, answer);
        (pending.resume)(self, table, answer)
    }

    fn resolve_from_hand(&self, answer: Answer) -> Result<Answer, EngineError> {
        let mut picked: SmallVec<[EntityId; 4]> = SmallVec::new();
        let mut resolve = |selector: CardSelector| -> Result<CardSelector, EngineError> {
            let card = self
                .zones
                .find_in_hand_excluding(selector, &picked)
                .ok_or(EngineError::CardNotInHand(selector))?;
            picked.push(card.entity());
            Ok(CardSelector::Instance(card.entity()))
        };

        Ok(match answer {
            Answer::Bool(value) => Answer::Bool(value),
            Answer::Card(card) => Answer::Card(card.map(&mut resolve).transpose()?),
            Answer::Cards(cards) => Answer::Cards(
                cards
                    .into_iter()
                    .map(resolve)
                    .collect::<Result<_, _>>()?,
            ),
        })
    }

    // === Convenience Wrappers ===

    /// Ask a yes/no question.
    pub fn ask(
        &mut self,
        table: &mut dyn Table,
        prompt: impl Into<String>,
        resume: impl FnOnce(&mut Player, &mut dyn Table, bool) -> Result<(), EngineError> + 'static,
    ) -> Result<(), EngineError> {
        self.choose(table, Question::ask(prompt), move |player, table, answer| {
            resume(player, table, answer.as_bool())
        })
    }

    /// Ask for at most one card.
    pub fn choose_card(
        &mut self,
        table: &mut dyn Table,
        prompt: impl Into<String>,
        options: ChoiceOptions,
        resume: impl FnOnce(&mut Player, &mut dyn Table, Option<CardSelector>) -> Result<(), EngineError>
            + 'static,
    ) -> Result<(), EngineError> {
        self.choose(table, Question::card(prompt, options), move |player, table, answer| {
            resume(player, table, answer.card())
        })
    }

    /// Ask for any number of cards.
    pub fn choose_cards(
        &mut self,
        table: &mut dyn Table,
        prompt: impl Into<String>,
        options: ChoiceOptions,
        resume: impl FnOnce(&mut Player, &mut dyn Table, SmallVec<[CardSelector; 4]>) -> Result<(), EngineError>
            + 'static,
    ) -> Result<(), EngineError> {
        self.choose(table, Question::cards(prompt, options), move |player, table, answer| {
            resume(player, table, answer.selected())
        })
    }
}
