//! Entity matching against the location and drone vocabularies
//!
//! Every whitespace token is scored against both vocabularies independently.
//! The single best surviving hit per vocabulary becomes the record field.

use crate::similarity::{SimilarityScorer, WeightedRatio};
use crate::transliterate::drone_label;
use crate::types::{best_candidate, ExtractionRecord, MatchCandidate, DRONE_THRESHOLD, LOCATION_THRESHOLD};
use crate::vocabulary::Vocabulary;

/// Per-vocabulary acceptance thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub location: u8,
    pub drone: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            location: LOCATION_THRESHOLD,
            drone: DRONE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EntityMatcher<S = WeightedRatio> {
    scorer: S,
    thresholds: Thresholds,
}

impl<S: SimilarityScorer> EntityMatcher<S> {
    pub fn new(scorer: S, thresholds: Thresholds) -> Self {
        Self { scorer, thresholds }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Extracts at most one record from recognized text.
    pub fn extract(
        &self,
        text: &str,
        locations: &Vocabulary,
        drones: &Vocabulary,
    ) -> Option<ExtractionRecord> {
        let location = self
            .best_for(text, locations, self.thresholds.location)
            .map(|m| m.candidate)
            .unwrap_or_default();

        let drone_type = self
            .best_for(text, drones, self.thresholds.drone)
            .map(|m| drone_label(&m.candidate))
            .unwrap_or_default();

        ExtractionRecord::new(location, drone_type)
    }

    /// Per-token best hits, reduced to the overall best.
    fn best_for(&self, text: &str, vocabulary: &Vocabulary, cutoff: u8) -> Option<MatchCandidate> {
        if vocabulary.is_empty() {
            return None;
        }

        let hits: Vec<MatchCandidate> = text
            .split_whitespace()
            .filter_map(|token| self.scorer.best_match(token, vocabulary.entries(), cutoff))
            .collect();

        best_candidate(hits)
    }
}

/// Matches with the default scorer and thresholds.
pub fn match_entities(
    text: &str,
    locations: &Vocabulary,
    drones: &Vocabulary,
) -> Option<ExtractionRecord> {
    EntityMatcher::<WeightedRatio>::default().extract(text, locations, drones)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(items: &[&str]) -> Vocabulary {
        items.iter().copied().collect()
    }

    #[test]
    fn test_fuzzy_location() {
        let record = match_entities("near Kiyv today", &vocab(&["Kyiv"]), &Vocabulary::default_drones());
        assert_eq!(
            record,
            Some(ExtractionRecord {
                location: "Kyiv".into(),
                drone_type: String::new(),
            })
        );
    }

    #[test]
    fn test_drone_transliterated() {
        let record = match_entities("spotted ORLAN unit", &Vocabulary::default(), &vocab(&["ORLAN"])).unwrap();
        assert_eq!(record.drone_type, "Орлан");
        assert!(record.location.is_empty());
    }

    #[test]
    fn test_cyrillic_drone_capitalized() {
        let record = match_entities("зала", &Vocabulary::default(), &Vocabulary::default_drones()).unwrap();
        assert_eq!(record.drone_type, "Зала");
    }

    #[test]
    fn test_no_match_no_record() {
        let record = match_entities("nothing relevant here", &vocab(&["Kyiv"]), &Vocabulary::default_drones());
        assert!(record.is_none());
    }

    #[test]
    fn test_empty_text() {
        assert!(match_entities("", &vocab(&["Kyiv"]), &Vocabulary::default_drones()).is_none());
        assert!(match_entities("   \n", &vocab(&["Kyiv"]), &Vocabulary::default_drones()).is_none());
    }

    #[test]
    fn test_drone_threshold_is_strict() {
        // "ORLN" vs "ORLAN" scores 89, enough for a location but not a drone
        let record = match_entities("ORLN", &Vocabulary::default(), &vocab(&["ORLAN"]));
        assert!(record.is_none());

        let record = match_entities("ORLN", &vocab(&["ORLAN"]), &vocab(&["ORLAN"])).unwrap();
        assert_eq!(record.location, "ORLAN");
        assert!(record.drone_type.is_empty());
    }

    #[test]
    fn test_drone_with_model_suffix() {
        let record = match_entities("spotted ORLAN-10 unit", &Vocabulary::default(), &Vocabulary::default_drones()).unwrap();
        assert_eq!(record.drone_type, "Орлан");
    }

    #[test]
    fn test_partial_multi_word_location() {
        let record = match_entities("near Burluk", &vocab(&["Velykyi Burluk"]), &Vocabulary::default()).unwrap();
        assert_eq!(record.location, "Velykyi Burluk");
    }

    #[test]
    fn test_token_feeds_both_fields() {
        let record = match_entities("Zala", &vocab(&["Zala"]), &vocab(&["ZALA"])).unwrap();
        assert_eq!(record.location, "Zala");
        assert_eq!(record.drone_type, "Зала");
    }

    #[test]
    fn test_best_location_across_tokens() {
        let locations = vocab(&["Kharkiv", "Kupiansk"]);
        let record = match_entities("Kharkov Kupiansk", &locations, &Vocabulary::default()).unwrap();
        assert_eq!(record.location, "Kupiansk");
    }

    #[test]
    fn test_tie_across_tokens_keeps_first() {
        let locations = vocab(&["Lviv", "Sumy"]);
        let record = match_entities("Sumy Lviv", &locations, &Vocabulary::default()).unwrap();
        assert_eq!(record.location, "Sumy");
    }

    #[test]
    fn test_location_kept_verbatim() {
        let record = match_entities("KYIV", &vocab(&["Kyiv"]), &Vocabulary::default()).unwrap();
        assert_eq!(record.location, "Kyiv");
    }

    #[test]
    fn test_custom_thresholds() {
        let matcher = EntityMatcher::new(WeightedRatio, Thresholds { location: 80, drone: 90 });
        assert!(matcher.extract("Kiyv", &vocab(&["Kyiv"]), &Vocabulary::default()).is_none());
        assert_eq!(matcher.thresholds().location, 80);
    }
}
