//! Question/answer types for decisions raised by card effects.
//!
//! An effect asks a [`Question`]; the answer comes from the inline answer
//! or responder given to the current `play`, or else from the player's
//! [`Strategy`]. The protocol itself (`choose`/`respond`) lives on
//! `Player`.

pub mod question;
pub mod strategy;

pub use question::{Answer, ChoiceOptions, Question, QuestionKind};
pub use strategy::{Continuation, PlayOptions, Responder, Strategy};
