//! Subject-area classification.
//!
//! The 180 plain question numbers split into four fixed, contiguous areas.
//! The span table below is the single source of truth for the boundaries;
//! nothing else in the crate hard-codes a range check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total plain question numbers across the two days.
pub const QUESTION_COUNT: u16 = 180;

/// One of the four fixed subject groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Languages,
    Humanities,
    NaturalSciences,
    Mathematics,
}

/// An area and the inclusive question-number span it covers.
#[derive(Debug, Clone, Copy)]
pub struct AreaSpan {
    pub area: Area,
    pub first: u16,
    pub last: u16,
}

/// Area spans in question order.
pub const AREA_SPANS: [AreaSpan; 4] = [
    AreaSpan {
        area: Area::Languages,
        first: 1,
        last: 45,
    },
    AreaSpan {
        area: Area::Humanities,
        first: 46,
        last: 90,
    },
    AreaSpan {
        area: Area::NaturalSciences,
        first: 91,
        last: 135,
    },
    AreaSpan {
        area: Area::Mathematics,
        first: 136,
        last: 180,
    },
];

impl Area {
    /// All areas, in question order.
    pub const ALL: [Area; 4] = [
        Area::Languages,
        Area::Humanities,
        Area::NaturalSciences,
        Area::Mathematics,
    ];

    /// Classify a plain question number into its area.
    ///
    /// Returns `None` for numbers outside every span; callers treat that as
    /// corrupt upstream data and skip the entry.
    pub fn of_question(number: u16) -> Option<Area> {
        AREA_SPANS
            .iter()
            .find(|span| (span.first..=span.last).contains(&number))
            .map(|span| span.area)
    }

    pub fn label(self) -> &'static str {
        match self {
            Area::Languages => "Languages",
            Area::Humanities => "Humanities",
            Area::NaturalSciences => "Natural Sciences",
            Area::Mathematics => "Mathematics",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
