//! Record types shared by the pipeline
//!
//! - ExtractionRecord: one location/drone pair per matched image
//! - MatchCandidate: a single scored vocabulary hit

use serde::Serialize;

/// Equipment labels expected on the maps, Latin and Cyrillic spellings.
pub const DEFAULT_DRONE_VOCABULARY: &[&str] = &[
    "ORLAN", "SUPERCAM", "ZALA", "Орлан", "зала", "Зала", "Суперкам",
];

/// Minimum score for a location hit
pub const LOCATION_THRESHOLD: u8 = 60;

/// Minimum score for a drone hit. Labels are short acronyms, so this is strict.
pub const DRONE_THRESHOLD: u8 = 90;

/// Output row for one processed image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionRecord {
    /// Location, verbatim from the vocabulary
    pub location: String,

    /// Equipment type, transliterated and capitalized
    pub drone_type: String,
}

impl ExtractionRecord {
    /// Returns None when both fields are empty.
    pub fn new(location: String, drone_type: String) -> Option<Self> {
        if location.is_empty() && drone_type.is_empty() {
            return None;
        }
        Some(Self { location, drone_type })
    }
}

/// Vocabulary entry together with its similarity score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub candidate: String,
    pub score: u8,
}

/// Picks the highest score. Ties go to the earliest candidate.
pub fn best_candidate<I>(candidates: I) -> Option<MatchCandidate>
where
    I: IntoIterator<Item = MatchCandidate>,
{
    candidates.into_iter().fold(None, |best, c| match best {
        Some(b) if b.score >= c.score => Some(b),
        _ => Some(c),
    })
}
