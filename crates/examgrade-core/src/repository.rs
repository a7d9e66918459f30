//! Static answer-key repository.
//!
//! Loaded once at startup from TOML key files, immutable thereafter.
//! Lookups by edition/day/color return `None` for the legitimate
//! empty-selection state; only the assembly path turns a missing key into
//! an error.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::assembler::{assemble, UnifiedKey};
use crate::error::GradeError;
use crate::model::{AnswerKey, Edition, ExamDay, ForeignLanguage};
use crate::parser::{load_key_directory, parse_key_file};

/// Lookup of available exam editions.
#[derive(Debug, Clone, Default)]
pub struct KeyRepository {
    editions: BTreeMap<String, Edition>,
}

impl KeyRepository {
    pub fn new(editions: impl IntoIterator<Item = Edition>) -> Self {
        let mut map = BTreeMap::new();
        for edition in editions {
            if let Some(previous) = map.insert(edition.id.clone(), edition) {
                tracing::warn!("duplicate edition id {}, keeping the later one", previous.id);
            }
        }
        Self { editions: map }
    }

    /// Load a repository from a single key file or a directory of them.
    pub fn load(path: &Path) -> Result<Self> {
        let editions = if path.is_dir() {
            load_key_directory(path)?
        } else {
            vec![parse_key_file(path)?]
        };
        Ok(Self::new(editions))
    }

    pub fn is_empty(&self) -> bool {
        self.editions.is_empty()
    }

    pub fn editions(&self) -> impl Iterator<Item = &Edition> {
        self.editions.values()
    }

    pub fn edition(&self, id: &str) -> Option<&Edition> {
        self.editions.get(id)
    }

    /// Look up one booklet's answer key. Color matching is case-insensitive.
    ///
    /// `None` means the combination does not exist — a legitimate state
    /// while a selection is still incomplete, not an error.
    pub fn lookup(&self, edition: &str, day: ExamDay, color: &str) -> Option<&AnswerKey> {
        self.edition(edition)?
            .session(day)
            .booklet(color)
            .map(|b| &b.key)
    }

    /// Resolve both days' keys and assemble the unified answer key.
    ///
    /// A missing key is rejected here, before assembly is attempted.
    pub fn unified_key(
        &self,
        edition: &str,
        day1_color: &str,
        day2_color: &str,
        language: ForeignLanguage,
    ) -> Result<UnifiedKey, GradeError> {
        if self.edition(edition).is_none() {
            return Err(GradeError::UnknownEdition(edition.to_string()));
        }

        let not_found = |day: ExamDay, color: &str| GradeError::BookletNotFound {
            edition: edition.to_string(),
            day,
            color: color.to_string(),
        };

        let day1 = self
            .lookup(edition, ExamDay::One, day1_color)
            .ok_or_else(|| not_found(ExamDay::One, day1_color))?;
        let day2 = self
            .lookup(edition, ExamDay::Two, day2_color)
            .ok_or_else(|| not_found(ExamDay::Two, day2_color))?;

        Ok(assemble(day1, day2, language))
    }
}
