//! Plaintext answer interchange.
//!
//! A lossless two-line-per-question encoding, used to move candidate
//! answers in and out of the system verbatim:
//!
//! ```text
//! 1
//! B
//! 2
//! D
//! ```
//!
//! An empty second line means "no answer" for that question. Import is
//! best-effort: a line pair that cannot be paired leaves that single
//! question unanswered and the rest of the import continues.

use crate::answers::CandidateAnswers;
use crate::model::{AnswerLetter, QuestionId};

/// A line pair the importer could not use.
#[derive(Debug, Clone)]
pub struct ImportWarning {
    /// 1-based line number the problem was found on.
    pub line: usize,
    /// Warning message.
    pub message: String,
}

/// Decode candidate answers from the two-line text format.
///
/// Letters are case-normalized to uppercase. Unusable pairs are reported as
/// warnings, never as a failed import.
pub fn decode_answers(text: &str) -> (CandidateAnswers, Vec<ImportWarning>) {
    let mut answers = CandidateAnswers::new();
    let mut warnings = Vec::new();

    let lines: Vec<&str> = text.lines().collect();
    for pair_start in (0..lines.len()).step_by(2) {
        let question_raw = lines[pair_start].trim();
        let answer_raw = lines.get(pair_start + 1).map(|l| l.trim());

        if question_raw.is_empty() {
            if let Some(dangling) = answer_raw.filter(|a| !a.is_empty()) {
                warnings.push(ImportWarning {
                    line: pair_start + 2,
                    message: format!("answer {dangling:?} has no question line"),
                });
            }
            continue;
        }

        match answer_raw {
            None => {
                warnings.push(ImportWarning {
                    line: pair_start + 1,
                    message: format!("question {question_raw} has no answer line"),
                });
            }
            Some("") => {} // explicitly unanswered
            Some(raw) => match raw.parse::<AnswerLetter>() {
                Ok(letter) => answers.insert(QuestionId::new(question_raw), letter),
                Err(_) => {
                    tracing::warn!("line {}: unrecognized answer {raw:?}", pair_start + 2);
                    warnings.push(ImportWarning {
                        line: pair_start + 2,
                        message: format!("question {question_raw}: unrecognized answer {raw:?}"),
                    });
                }
            },
        }
    }

    (answers, warnings)
}

/// Encode answered questions back into the two-line text format.
pub fn encode_answers(answers: &CandidateAnswers) -> String {
    let mut text = String::new();
    for (question, letter) in answers.iter() {
        text.push_str(question.as_str());
        text.push('\n');
        text.push_str(&letter.to_string());
        text.push('\n');
    }
    text
}
