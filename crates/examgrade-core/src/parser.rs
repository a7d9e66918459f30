//! TOML answer-key file parser.
//!
//! Loads exam editions from TOML files and directories, and validates them.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::areas::Area;
use crate::model::{AnswerKey, Booklet, Edition, QuestionId, Session, LANGUAGE_QUESTIONS};

/// Intermediate TOML structure for parsing key files.
#[derive(Debug, Deserialize)]
struct TomlKeyFile {
    edition: TomlEditionHeader,
    #[serde(default)]
    day1: Vec<TomlBooklet>,
    #[serde(default)]
    day2: Vec<TomlBooklet>,
}

#[derive(Debug, Deserialize)]
struct TomlEditionHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlBooklet {
    color: String,
    #[serde(default)]
    key: BTreeMap<String, String>,
}

/// Parse a single TOML file into an `Edition`.
pub fn parse_key_file(path: &Path) -> Result<Edition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read key file: {}", path.display()))?;

    parse_key_file_str(&content, path)
}

/// Parse a TOML string into an `Edition` (useful for testing).
pub fn parse_key_file_str(content: &str, source_path: &Path) -> Result<Edition> {
    let parsed: TomlKeyFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let edition_id = parsed.edition.id;
    let day1 = convert_session(parsed.day1, &edition_id)?;
    let day2 = convert_session(parsed.day2, &edition_id)?;

    Ok(Edition {
        id: edition_id,
        name: parsed.edition.name,
        description: parsed.edition.description,
        day1,
        day2,
    })
}

fn convert_session(booklets: Vec<TomlBooklet>, edition_id: &str) -> Result<Session> {
    let booklets = booklets
        .into_iter()
        .map(|b| {
            let key = b
                .key
                .into_iter()
                .map(|(question, value)| {
                    let answer = value.parse().map_err(|e: String| {
                        anyhow::anyhow!(
                            "{edition_id}/{}: question {question}: {e}",
                            b.color
                        )
                    })?;
                    Ok((QuestionId::new(question), answer))
                })
                .collect::<Result<AnswerKey>>()?;

            Ok(Booklet {
                color: b.color,
                key,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Session { booklets })
}

/// Recursively load all `.toml` key files from a directory.
pub fn load_key_directory(dir: &Path) -> Result<Vec<Edition>> {
    let mut editions = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            editions.extend(load_key_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_key_file(&path) {
                Ok(edition) => editions.push(edition),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(editions)
}

/// A warning from edition validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The booklet color (if applicable).
    pub booklet: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate an edition's key data for common issues.
pub fn validate_edition(edition: &Edition) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (day, session) in [("day1", &edition.day1), ("day2", &edition.day2)] {
        if session.booklets.is_empty() {
            warnings.push(ValidationWarning {
                booklet: None,
                message: format!("{day} has no booklets"),
            });
        }

        // Colors must be unique within a session, case-insensitively.
        let mut seen_colors = HashSet::new();
        for booklet in &session.booklets {
            if !seen_colors.insert(booklet.color.to_lowercase()) {
                warnings.push(ValidationWarning {
                    booklet: Some(booklet.color.clone()),
                    message: format!("duplicate {day} color: {}", booklet.color),
                });
            }

            if booklet.key.is_empty() {
                warnings.push(ValidationWarning {
                    booklet: Some(booklet.color.clone()),
                    message: format!("{day} booklet {} has an empty key", booklet.color),
                });
            }

            for question in booklet.key.keys() {
                if question.is_essay() {
                    continue;
                }
                match question.number() {
                    Some(n) if Area::of_question(n).is_some() => {
                        if question.language().is_some() && !LANGUAGE_QUESTIONS.contains(&n) {
                            warnings.push(ValidationWarning {
                                booklet: Some(booklet.color.clone()),
                                message: format!(
                                    "question {question} carries a language suffix outside 1-5"
                                ),
                            });
                        }
                    }
                    _ => {
                        warnings.push(ValidationWarning {
                            booklet: Some(booklet.color.clone()),
                            message: format!("question {question} matches no area"),
                        });
                    }
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerLetter, CorrectAnswer};
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[edition]
id = "2024"
name = "National Exam 2024"
description = "Both days, two booklet colors each"

[[day1]]
color = "Blue"
[day1.key]
1E = "A"
1S = "B"
6 = "C"
7 = "annulled"
Essay = "annulled"

[[day1]]
color = "Yellow"
[day1.key]
1E = "B"
6 = "D"

[[day2]]
color = "Gray"
[day2.key]
91 = "E"
136 = "A"
"#;

    #[test]
    fn parse_valid_toml() {
        let edition = parse_key_file_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(edition.id, "2024");
        assert_eq!(edition.name, "National Exam 2024");
        assert_eq!(edition.day1.booklets.len(), 2);
        assert_eq!(edition.day2.booklets.len(), 1);

        let blue = edition.day1.booklet("blue").unwrap();
        assert_eq!(
            blue.key.get(&QuestionId::from("1E")),
            Some(&CorrectAnswer::Letter(AnswerLetter::A))
        );
        assert_eq!(
            blue.key.get(&QuestionId::from("7")),
            Some(&CorrectAnswer::Annulled)
        );
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[edition]
id = "minimal"
name = "Minimal"

[[day1]]
color = "Blue"
[day1.key]
1 = "A"
"#;
        let edition = parse_key_file_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert!(edition.description.is_empty());
        assert!(edition.day2.booklets.is_empty());
    }

    #[test]
    fn parse_rejects_bad_answer_value() {
        let toml = r#"
[edition]
id = "bad"
name = "Bad"

[[day1]]
color = "Blue"
[day1.key]
1 = "Z"
"#;
        let err = parse_key_file_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(err.to_string().contains("question 1"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_key_file_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_duplicate_colors() {
        let toml = r#"
[edition]
id = "dupes"
name = "Dupes"

[[day1]]
color = "Blue"
[day1.key]
6 = "A"

[[day1]]
color = "BLUE"
[day1.key]
6 = "B"
"#;
        let edition = parse_key_file_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_edition(&edition);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_unclassifiable_question() {
        let toml = r#"
[edition]
id = "odd"
name = "Odd"

[[day1]]
color = "Blue"
[day1.key]
181 = "A"
"#;
        let edition = parse_key_file_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_edition(&edition);
        assert!(warnings.iter().any(|w| w.message.contains("matches no area")));
    }

    #[test]
    fn validate_suffix_outside_first_five() {
        let toml = r#"
[edition]
id = "odd"
name = "Odd"

[[day1]]
color = "Blue"
[day1.key]
9E = "A"
"#;
        let edition = parse_key_file_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_edition(&edition);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("language suffix outside")));
    }

    #[test]
    fn validate_clean_edition_has_no_warnings() {
        let edition = parse_key_file_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_edition(&edition);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("2024.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();

        let editions = load_key_directory(dir.path()).unwrap();
        assert_eq!(editions.len(), 1);
        assert_eq!(editions[0].id, "2024");
    }
}
