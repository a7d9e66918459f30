//! Answer-key assembly.
//!
//! Unifies the two sessions' keys for the chosen booklet colors into the
//! single filtered key the grader compares against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AnswerKey, AnswerLetter, CorrectAnswer, ForeignLanguage, QuestionId};

/// The unified, filtered answer key for one grading pass.
///
/// Annulled questions, the essay entry, and the non-matching language
/// variants are already gone; every remaining value is a concrete letter.
/// Identifiers that carry the matching language suffix keep it — candidate
/// answers must be rewritten to the same form (see
/// [`CandidateAnswers::with_language`](crate::answers::CandidateAnswers::with_language)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnifiedKey(BTreeMap<QuestionId, AnswerLetter>);

impl UnifiedKey {
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
}

impl FromIterator<(QuestionId, AnswerLetter)> for UnifiedKey {
    fn from_iter<T: IntoIterator<Item = (QuestionId, AnswerLetter)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Merge two per-day keys into one unified key for the given language.
///
/// Precedence: on identifier collision, the day-2 entry overrides the day-1
/// entry. Collisions do not occur in valid exam data, but the merge is
/// deterministic either way — day 1 is inserted first, day 2 second.
///
/// After the merge, three kinds of entries are dropped: annulled questions,
/// the essay entry, and language variants whose suffix does not match
/// `language`.
pub fn assemble(day1: &AnswerKey, day2: &AnswerKey, language: ForeignLanguage) -> UnifiedKey {
    let mut merged: BTreeMap<&QuestionId, CorrectAnswer> = BTreeMap::new();
    for (question, answer) in day1.iter().chain(day2.iter()) {
        merged.insert(question, *answer);
    }

    merged
        .into_iter()
        .filter_map(|(question, answer)| {
            if question.is_essay() {
                return None;
            }
            let letter = match answer {
                CorrectAnswer::Letter(letter) => letter,
                CorrectAnswer::Annulled => return None,
            };
            if question.language().is_some_and(|lang| lang != language) {
                return None;
            }
            Some((question.clone(), letter))
        })
        .collect()
}
