//! Questions and answers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardSelector;
use crate::error::EngineError;

/// Shape of the decision being asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Yes or no.
    Bool,
    /// Zero or one card.
    Card,
    /// Any number of cards.
    Cards,
}

impl FromStr for QuestionKind {
    type Err = EngineError;

    /// Parses the names strategies use in text protocols and scripts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(QuestionKind::Bool),
            "card" => Ok(QuestionKind::Card),
            "cards" => Ok(QuestionKind::Cards),
            other => Err(EngineError::UnknownQuestionKind(other.to_string())),
        }
    }
}

/// Constraints on acceptable answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOptions {
    /// Chosen cards must be in the asking player's hand.
    pub from_hand: bool,
}

impl ChoiceOptions {
    #[must_use]
    pub fn from_hand() -> Self {
        Self { from_hand: true }
    }
}

/// A pending decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: ChoiceOptions,
}

impl Question {
    #[must_use]
    pub fn new(kind: QuestionKind, prompt: impl Into<String>, options: ChoiceOptions) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
            options,
        }
    }

    #[must_use]
    pub fn ask(prompt: impl Into<String>) -> Self {
        Self::new(QuestionKind::Bool, prompt, ChoiceOptions::default())
    }

    #[must_use]
    pub fn card(prompt: impl Into<String>, options: ChoiceOptions) -> Self {
        Self::new(QuestionKind::Card, prompt, options)
    }

    #[must_use]
    pub fn cards(prompt: impl Into<String>, options: ChoiceOptions) -> Self {
        Self::new(QuestionKind::Cards, prompt, options)
    }

    /// Only card questions constrained to hand need selector resolution.
    #[must_use]
    pub fn resolves_from_hand(&self) -> bool {
        self.options.from_hand && self.kind != QuestionKind::Bool
    }
}

/// A value answering a [`Question`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Bool(bool),
    Card(Option<CardSelector>),
    Cards(SmallVec<[CardSelector; 4]>),
}

impl Answer {
    /// The question kind this answer fits.
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            Answer::Bool(_) => QuestionKind::Bool,
            Answer::Card(_) => QuestionKind::Card,
            Answer::Cards(_) => QuestionKind::Cards,
        }
    }

    /// Build a multi-card answer.
    pub fn cards(selectors: impl IntoIterator<Item = CardSelector>) -> Self {
        Answer::Cards(selectors.into_iter().collect())
    }

    /// The boolean, or `false` for card answers.
    #[must_use]
    pub fn as_bool(&self) -> bool {
        matches!(self, Answer::Bool(true))
    }

    /// The single card, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardSelector> {
        match self {
            Answer::Card(card) => *card,
            _ => None,
        }
    }

    /// All chosen cards (a single-card answer yields at most one).
    #[must_use]
    pub fn selected(&self) -> SmallVec<[CardSelector; 4]> {
        match self {
            Answer::Bool(_) => SmallVec::new(),
            Answer::Card(card) => card.iter().copied().collect(),
            Answer::Cards(cards) => cards.clone(),
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Bool(value)
    }
}

impl From<Option<CardSelector>> for Answer {
    fn from(card: Option<CardSelector>) -> Self {
        Answer::Card(card)
    }
}

impl From<Vec<CardSelector>> for Answer {
    fn from(cards: Vec<CardSelector>) -> Self {
        Answer::cards(cards)
    }
}
