//! Candidate answers and the language-suffix adapter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AnswerLetter, ForeignLanguage, QuestionId, LANGUAGE_QUESTIONS};

/// The answers a candidate marked, keyed by question identifier.
///
/// A question absent from the mapping was not answered — never wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateAnswers(BTreeMap<QuestionId, AnswerLetter>);

impl CandidateAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: QuestionId, letter: AnswerLetter) {
        self.0.insert(question, letter);
    }

    pub fn get(&self, question: &QuestionId) -> Option<AnswerLetter> {
        self.0.get(question).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in question order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, AnswerLetter)> {
        self.0.iter().map(|(q, a)| (q, *a))
    }

    /// Rewrite answers to the language-dependent questions into their
    /// suffixed form.
    ///
    /// Raw submitted answers are keyed by the plain numeric identifier; the
    /// unified key only contains the suffixed form for questions 1–5, so an
    /// answer under `"1"` moves to `"1E"` (or `"1S"`) and the bare key is
    /// removed. Every other identifier passes through unchanged.
    pub fn with_language(mut self, language: ForeignLanguage) -> Self {
        for n in LANGUAGE_QUESTIONS {
            if let Some(letter) = self.0.remove(&QuestionId::from_number(n)) {
                self.0.insert(QuestionId::with_language(n, language), letter);
            }
        }
        self
    }
}

impl FromIterator<(QuestionId, AnswerLetter)> for CandidateAnswers {
    fn from_iter<T: IntoIterator<Item = (QuestionId, AnswerLetter)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
