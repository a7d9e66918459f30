//! Core data model types for examgrade.
//!
//! These are the fundamental types the entire examgrade system uses to
//! represent exam editions, booklet variants, answer keys, and the
//! identifiers that tie them together.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Identifier of the essay/writing entry in raw key data. Never graded.
pub const ESSAY_ID: &str = "Essay";

/// Question numbers that exist in two foreign-language variants.
pub const LANGUAGE_QUESTIONS: RangeInclusive<u16> = 1..=5;

/// A question identifier as it appears in key data and submitted answers.
///
/// Three encodings exist: plain numeric (`"1"`–`"180"`), numeric with a
/// language suffix (`"1E"`/`"1S"` … for the questions in
/// [`LANGUAGE_QUESTIONS`]), and the essay marker [`ESSAY_ID`].
///
/// Ordering is numeric-aware: `"2"` sorts before `"10"`, suffixed variants
/// sort with their number, and non-numeric identifiers sort last. Maps keyed
/// by `QuestionId` therefore iterate in question order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Plain numeric identifier.
    pub fn from_number(number: u16) -> Self {
        Self(number.to_string())
    }

    /// Language-suffixed identifier, e.g. `(1, English)` → `"1E"`.
    pub fn with_language(number: u16, language: ForeignLanguage) -> Self {
        Self(format!("{number}{}", language.suffix()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_essay(&self) -> bool {
        self.0 == ESSAY_ID
    }

    fn split_suffix(&self) -> (&str, Option<char>) {
        if let Some(digits) = self.0.strip_suffix('E') {
            (digits, Some('E'))
        } else if let Some(digits) = self.0.strip_suffix('S') {
            (digits, Some('S'))
        } else {
            (self.0.as_str(), None)
        }
    }

    /// The numeric part, with any language suffix stripped.
    pub fn number(&self) -> Option<u16> {
        let (digits, _) = self.split_suffix();
        digits.parse().ok()
    }

    /// The language variant this identifier belongs to, if any.
    ///
    /// Only suffixed identifiers whose prefix is numeric carry a language;
    /// the essay marker and plain numbers return `None`.
    pub fn language(&self) -> Option<ForeignLanguage> {
        let (digits, suffix) = self.split_suffix();
        if digits.parse::<u16>().is_err() {
            return None;
        }
        match suffix {
            Some('E') => Some(ForeignLanguage::English),
            Some('S') => Some(ForeignLanguage::Spanish),
            _ => None,
        }
    }
}

impl Ord for QuestionId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for QuestionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// One of the five answer alternatives on the answer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            AnswerLetter::A => 'A',
            AnswerLetter::B => 'B',
            AnswerLetter::C => 'C',
            AnswerLetter::D => 'D',
            AnswerLetter::E => 'E',
        };
        write!(f, "{c}")
    }
}

impl FromStr for AnswerLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(AnswerLetter::A),
            "B" => Ok(AnswerLetter::B),
            "C" => Ok(AnswerLetter::C),
            "D" => Ok(AnswerLetter::D),
            "E" => Ok(AnswerLetter::E),
            other => Err(format!("unknown answer letter: {other:?}")),
        }
    }
}

/// The value a key assigns to a question: a correct letter, or the sentinel
/// marking the question annulled for every candidate.
///
/// Spelled `"A"`–`"E"` or `"annulled"` (case-insensitive) in data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CorrectAnswer {
    Letter(AnswerLetter),
    Annulled,
}

impl fmt::Display for CorrectAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectAnswer::Letter(letter) => write!(f, "{letter}"),
            CorrectAnswer::Annulled => write!(f, "annulled"),
        }
    }
}

impl FromStr for CorrectAnswer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("annulled") {
            return Ok(CorrectAnswer::Annulled);
        }
        s.parse::<AnswerLetter>()
            .map(CorrectAnswer::Letter)
            .map_err(|_| format!("expected an answer letter or \"annulled\", got {s:?}"))
    }
}

impl From<CorrectAnswer> for String {
    fn from(value: CorrectAnswer) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CorrectAnswer {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The two mutually exclusive foreign-language tracks.
///
/// English questions carry the `E` suffix, Spanish the `S` suffix; exactly
/// one variant of each question in [`LANGUAGE_QUESTIONS`] is active per
/// candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForeignLanguage {
    English,
    Spanish,
}

impl ForeignLanguage {
    /// The identifier suffix marking this language's question variants.
    pub fn suffix(self) -> char {
        match self {
            ForeignLanguage::English => 'E',
            ForeignLanguage::Spanish => 'S',
        }
    }
}

impl fmt::Display for ForeignLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForeignLanguage::English => write!(f, "english"),
            ForeignLanguage::Spanish => write!(f, "spanish"),
        }
    }
}

impl FromStr for ForeignLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(ForeignLanguage::English),
            "spanish" | "es" => Ok(ForeignLanguage::Spanish),
            other => Err(format!("unknown foreign language: {other}")),
        }
    }
}

/// One of the two testing days within an edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamDay {
    One,
    Two,
}

impl fmt::Display for ExamDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamDay::One => write!(f, "day 1"),
            ExamDay::Two => write!(f, "day 2"),
        }
    }
}

impl FromStr for ExamDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "day1" | "day-1" => Ok(ExamDay::One),
            "2" | "day2" | "day-2" => Ok(ExamDay::Two),
            other => Err(format!("unknown exam day: {other}")),
        }
    }
}

/// Per-question answer key of one booklet variant.
pub type AnswerKey = BTreeMap<QuestionId, CorrectAnswer>;

/// One printed version of a day's exam, distinguished by color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booklet {
    /// Color label, unique within its session (case-insensitively).
    pub color: String,
    /// Question → correct answer (or annulled).
    pub key: AnswerKey,
}

/// The ordered booklet variants offered on one testing day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub booklets: Vec<Booklet>,
}

impl Session {
    /// Find a booklet by color, case-insensitively.
    pub fn booklet(&self, color: &str) -> Option<&Booklet> {
        self.booklets
            .iter()
            .find(|b| b.color.eq_ignore_ascii_case(color))
    }

    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.booklets.iter().map(|b| b.color.as_str())
    }
}

/// One calendar sitting of the exam, with its two testing days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edition {
    /// Unique identifier, e.g. a year.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub day1: Session,
    pub day2: Session,
}

impl Edition {
    pub fn session(&self, day: ExamDay) -> &Session {
        match day {
            ExamDay::One => &self.day1,
            ExamDay::Two => &self.day2,
        }
    }
}
