//! Grading error types.
//!
//! These cover the selection path from repository lookup to key assembly.
//! A question that classifies to no area and a malformed import line are
//! deliberately not errors: the first is logged and skipped by the grader,
//! the second becomes an [`ImportWarning`](crate::codec::ImportWarning) and
//! the import continues.

use thiserror::Error;

use crate::model::ExamDay;

/// Errors raised while resolving answer keys for a grading request.
#[derive(Debug, Error)]
pub enum GradeError {
    /// The requested edition does not exist in the repository.
    #[error("unknown edition: {0}")]
    UnknownEdition(String),

    /// The requested color does not exist for that edition and day.
    #[error("edition {edition} has no {day} booklet with color {color:?}")]
    BookletNotFound {
        edition: String,
        day: ExamDay,
        color: String,
    },
}

impl GradeError {
    /// Returns `true` if this error reflects an incomplete selection the
    /// caller can fix by choosing differently, rather than corrupt data.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GradeError::UnknownEdition(_) | GradeError::BookletNotFound { .. }
        )
    }
}
