//! Approximate string scoring on a 0-100 scale
//!
//! `WeightedRatio` follows the classic fuzzy-matching WRatio: the best of a
//! plain indel ratio and token sort/set ratios, plus scaled substring
//! (partial) ratios once the two lengths differ by 1.5x or more. This lets
//! `ORLAN-10` match `ORLAN` and `Burluk` match `Velykyi Burluk`.

use crate::types::{best_candidate, MatchCandidate};
use rapidfuzz::distance::indel;
use std::collections::BTreeSet;

const UNBASE_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.90;
const LONG_PARTIAL_SCALE: f64 = 0.60;

/// Scores a query against vocabulary entries.
pub trait SimilarityScorer {
    /// Similarity in 0..=100
    fn score(&self, query: &str, candidate: &str) -> u8;

    /// Best candidate at or above `cutoff`. Ties keep the earliest entry.
    fn best_match(&self, query: &str, candidates: &[String], cutoff: u8) -> Option<MatchCandidate> {
        let best = best_candidate(candidates.iter().map(|c| MatchCandidate {
            candidate: c.clone(),
            score: self.score(query, c),
        }))?;
        (best.score >= cutoff).then_some(best)
    }
}

/// Default scorer: weighted ratio over indel similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRatio;

impl SimilarityScorer for WeightedRatio {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        let a = preprocess(query);
        let b = preprocess(candidate);
        let (a_chars, b_chars): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
        if a_chars.is_empty() || b_chars.is_empty() {
            return 0;
        }

        let base = ratio(&a_chars, &b_chars) as f64;
        let (short, long) = if a_chars.len() <= b_chars.len() {
            (a_chars.len(), b_chars.len())
        } else {
            (b_chars.len(), a_chars.len())
        };
        let len_ratio = long as f64 / short as f64;

        let best = if len_ratio < 1.5 {
            let sort = token_sort_ratio(&a, &b, ratio) as f64 * UNBASE_SCALE;
            let set = token_set_ratio(&a, &b, ratio) as f64 * UNBASE_SCALE;
            base.max(sort).max(set)
        } else {
            let scale = if len_ratio > 8.0 { LONG_PARTIAL_SCALE } else { PARTIAL_SCALE };
            let partial = partial_ratio(&a_chars, &b_chars) as f64 * scale;
            let sort = token_sort_ratio(&a, &b, partial_ratio) as f64 * UNBASE_SCALE * scale;
            let set = token_set_ratio(&a, &b, partial_ratio) as f64 * UNBASE_SCALE * scale;
            base.max(partial).max(sort).max(set)
        };

        round_score(best)
    }
}

/// Lower-case, replace non-alphanumerics with spaces, trim.
fn preprocess(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.trim().to_string()
}

fn round_score(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Normalized indel similarity, 0 when either side is empty.
fn ratio(a: &[char], b: &[char]) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let total = a.len() + b.len();
    let distance = indel::distance(a.iter().copied(), b.iter().copied());
    round_score(100.0 * total.saturating_sub(distance) as f64 / total as f64)
}

/// Best ratio of the shorter string against every same-length window of the longer.
fn partial_ratio(a: &[char], b: &[char]) -> u8 {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0;
    }

    long.windows(short.len())
        .map(|window| ratio(short, window))
        .max()
        .unwrap_or(0)
}

fn tokens(s: &str) -> BTreeSet<&str> {
    s.split_whitespace().collect()
}

fn join(tokens: &[&str]) -> Vec<char> {
    tokens.join(" ").chars().collect()
}

fn token_sort_ratio(a: &str, b: &str, scorer: fn(&[char], &[char]) -> u8) -> u8 {
    let mut a_tokens: Vec<&str> = a.split_whitespace().collect();
    let mut b_tokens: Vec<&str> = b.split_whitespace().collect();
    a_tokens.sort_unstable();
    b_tokens.sort_unstable();
    scorer(&join(&a_tokens), &join(&b_tokens))
}

/// Compares the shared tokens against each side's shared+remaining tokens.
fn token_set_ratio(a: &str, b: &str, scorer: fn(&[char], &[char]) -> u8) -> u8 {
    let a_set = tokens(a);
    let b_set = tokens(b);

    let common: Vec<&str> = a_set.intersection(&b_set).copied().collect();
    let a_only: Vec<&str> = a_set.difference(&b_set).copied().collect();
    let b_only: Vec<&str> = b_set.difference(&a_set).copied().collect();

    let sect = join(&common);
    let a_combined = join(&[common.as_slice(), a_only.as_slice()].concat());
    let b_combined = join(&[common.as_slice(), b_only.as_slice()].concat());

    scorer(&sect, &a_combined)
        .max(scorer(&sect, &b_combined))
        .max(scorer(&a_combined, &b_combined))
}
