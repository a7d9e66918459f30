//! examgrade-store — Saved grading configurations.
//!
//! Persists named configurations (edition, booklet colors, language choice,
//! raw answers text) to a versioned JSON file. New entries are prepended so
//! the most recent configuration lists first. The grading core never
//! depends on anything here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use examgrade_core::model::ForeignLanguage;

/// Current on-disk format version.
pub const STORE_VERSION: u32 = 1;

/// One saved grading configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfig {
    /// User-chosen name for this configuration.
    pub name: String,
    pub edition: String,
    pub day1_color: String,
    pub day2_color: String,
    pub language: ForeignLanguage,
    /// Candidate answers in the two-line interchange format, verbatim.
    pub answers_text: String,
    pub saved_at: DateTime<Utc>,
}

/// The ordered list of saved configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigStore {
    pub version: u32,
    entries: Vec<SavedConfig>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            entries: Vec::new(),
        }
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from a JSON file.
    ///
    /// A missing file is an empty store; an unsupported version is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read saved configurations from {}", path.display()))?;
        let store: ConfigStore =
            serde_json::from_str(&content).context("failed to parse saved configurations")?;

        if store.version != STORE_VERSION {
            anyhow::bail!("unsupported saved-configuration version: {}", store.version);
        }

        Ok(store)
    }

    /// Save the store atomically, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let mut file = AtomicWriteFile::open(path)
            .with_context(|| format!("failed to open {} for writing", path.display()))?;
        serde_json::to_writer_pretty(&mut file, self)
            .context("failed to serialize saved configurations")?;
        file.commit().context("failed to save configurations")?;

        Ok(())
    }

    /// Prepend a configuration so it lists first.
    pub fn prepend(&mut self, config: SavedConfig) {
        self.entries.insert(0, config);
    }

    pub fn entries(&self) -> &[SavedConfig] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return the configuration at `index` (0 = most recent).
    pub fn delete(&mut self, index: usize) -> Result<SavedConfig> {
        if index >= self.entries.len() {
            anyhow::bail!(
                "no saved configuration at index {index} ({} saved)",
                self.entries.len()
            );
        }
        Ok(self.entries.remove(index))
    }
}

/// Default store location under the user's config directory.
pub fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("examgrade")
        .join("saved.json")
}
