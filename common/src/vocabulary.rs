//! Controlled vocabularies
//!
//! Locations come from a newline-delimited file, drone types from a fixed list.

use crate::error::Result;
use crate::types::DEFAULT_DRONE_VOCABULARY;
use std::path::Path;

/// Ordered list of canonical strings. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    /// One entry per line, trimmed, blank lines dropped.
    pub fn from_lines(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { entries }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_lines(&content))
    }

    pub fn default_drones() -> Self {
        DEFAULT_DRONE_VOCABULARY.iter().copied().collect()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
