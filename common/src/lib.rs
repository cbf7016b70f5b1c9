//! Marker OCR Common Library
//!
//! Pure matching logic shared by the batch pipeline: record types,
//! transliteration, fuzzy scoring, vocabularies and CSV encoding.

pub mod types;
pub mod error;
pub mod transliterate;
pub mod similarity;
pub mod vocabulary;
pub mod matcher;
pub mod table;

pub use types::{ExtractionRecord, MatchCandidate, DEFAULT_DRONE_VOCABULARY};
pub use error::{Error, Result};
pub use transliterate::{capitalize, drone_label, transliterate};
pub use similarity::{SimilarityScorer, WeightedRatio};
pub use vocabulary::Vocabulary;
pub use matcher::{match_entities, EntityMatcher, Thresholds};
pub use table::{write_csv, CSV_HEADER};
