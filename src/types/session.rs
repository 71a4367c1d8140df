//! Answer sets and per-session quiz state
//!
//! The UI layer owns a `QuizSession` for its lifetime. Every transition
//! here is synchronous and touches nothing outside the session value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use crate::types::{Choice, SessionError};

/// Question index -> chosen slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    choices: BTreeMap<usize, Choice>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for `question`
    pub fn insert(&mut self, question: usize, choice: Choice) -> Option<Choice> {
        self.choices.insert(question, choice)
    }

    pub fn get(&self, question: usize) -> Option<Choice> {
        self.choices.get(&question).copied()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Choice)> + '_ {
        self.choices.iter().map(|(q, c)| (*q, *c))
    }

    /// Exactly one answer for every index in `[0, total)` and nothing else
    pub fn is_complete(&self, total: usize) -> bool {
        self.choices.len() == total && self.choices.keys().all(|q| *q < total)
    }

    /// Build from a letter string such as `"ABBA"` (question i = letter i)
    pub fn from_letters(letters: &str) -> Result<Self, SessionError> {
        let mut answers = Self::new();
        for (question, c) in letters.chars().enumerate() {
            let choice = Choice::from_input(&c.to_string())
                .ok_or_else(|| SessionError::InvalidChoice(c.to_string()))?;
            answers.insert(question, choice);
        }
        Ok(answers)
    }
}

impl FromIterator<(usize, Choice)> for Answers {
    fn from_iter<I: IntoIterator<Item = (usize, Choice)>>(iter: I) -> Self {
        Self {
            choices: iter.into_iter().collect(),
        }
    }
}

/// In-progress answers plus the result-reveal flag.
///
/// Reveal is a two-step gate: a complete answer set unlocks it, an
/// explicit `request_reveal` sets it. Re-answering after reveal leaves
/// the flag alone; only `reset` clears it, together with the answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuizSession {
    answers: Answers,
    revealed: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self, total: usize) -> bool {
        self.answers.is_complete(total)
    }

    /// Fraction answered, for a progress bar
    pub fn progress(&self, total: usize) -> f64 {
        if total == 0 {
            return 1.0;
        }
        (self.answers.len() as f64 / total as f64).min(1.0)
    }

    pub fn record_answer(
        &mut self,
        question: usize,
        choice: Choice,
        total: usize,
    ) -> Result<(), SessionError> {
        if question >= total {
            return Err(SessionError::QuestionOutOfRange { question, total });
        }
        self.answers.insert(question, choice);
        Ok(())
    }

    pub fn request_reveal(&mut self, total: usize) -> Result<(), SessionError> {
        if !self.is_complete(total) {
            return Err(SessionError::Incomplete {
                answered: self.answers.len(),
                total,
            });
        }
        self.revealed = true;
        Ok(())
    }

    /// Fresh session: no answers, not revealed
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
