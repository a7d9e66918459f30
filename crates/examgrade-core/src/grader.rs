//! Comparison and tallying of candidate answers against a unified key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::answers::CandidateAnswers;
use crate::areas::Area;
use crate::assembler::UnifiedKey;
use crate::model::{AnswerLetter, QuestionId};

/// Questions considered and questions answered correctly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub total: u32,
    pub correct: u32,
}

impl Tally {
    /// Questions not answered correctly (wrong or unanswered).
    pub fn missed(&self) -> u32 {
        self.total - self.correct
    }

    /// Fraction correct, 0.0 when nothing was considered.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total)
        }
    }
}

/// Per-area and overall statistics for one grading pass.
///
/// All four areas are always present; `overall` equals the sum of the
/// per-area tallies in both fields. Recomputed fresh on every pass, never
/// cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall: Tally,
    pub per_area: BTreeMap<Area, Tally>,
}

impl ScoreReport {
    fn empty() -> Self {
        Self {
            overall: Tally::default(),
            per_area: Area::ALL.into_iter().map(|a| (a, Tally::default())).collect(),
        }
    }

    pub fn area(&self, area: Area) -> Tally {
        self.per_area.get(&area).copied().unwrap_or_default()
    }
}

/// One incorrectly answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub question: QuestionId,
    pub area: Area,
    pub expected: AnswerLetter,
    pub marked: AnswerLetter,
}

/// The full outcome of one grading pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedExam {
    pub report: ScoreReport,
    /// Mismatches in key iteration order (question order).
    pub mismatches: Vec<Mismatch>,
}

/// Score a candidate's answers against the unified key.
///
/// Per key entry: classify the identifier's numeric part into an area
/// (entries matching no area are skipped entirely — corrupt upstream data),
/// count it toward the area and overall totals, then compare the marked
/// letter if one exists. An unanswered question counts toward totals only;
/// a wrong answer additionally emits a [`Mismatch`].
pub fn grade(key: &UnifiedKey, answers: &CandidateAnswers) -> GradedExam {
    let mut report = ScoreReport::empty();
    let mut mismatches = Vec::new();

    for (question, expected) in key.iter() {
        let Some(area) = question.number().and_then(Area::of_question) else {
            tracing::warn!("question {question} matches no area, skipping");
            continue;
        };

        report.overall.total += 1;
        let tally = report.per_area.entry(area).or_default();
        tally.total += 1;

        let Some(marked) = answers.get(question) else {
            continue;
        };

        if marked == expected {
            report.overall.correct += 1;
            tally.correct += 1;
        } else {
            mismatches.push(Mismatch {
                question: question.clone(),
                area,
                expected,
                marked,
            });
        }
    }

    GradedExam { report, mismatches }
}
