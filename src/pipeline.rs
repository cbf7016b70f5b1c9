//! Batch orchestration
//!
//! Listing -> per-file (normalize, recognize, match) -> persist -> cleanup.
//!
//! **Destructive:** after the output table is written successfully, every
//! image found in the input directory is deleted, including images that
//! failed to decode or produced no match. Nothing is deleted when listing
//! or persisting fails.

use crate::error::{MarkerOcrError, Result};
use crate::export::TableWriter;
use crate::preprocess::{self, NormalizeOptions};
use crate::recognizer::{preview, recognize_text, TextRecognizer};
use crate::scanner::{self, ImageInfo};
use indicatif::{ProgressBar, ProgressStyle};
use marker_ocr_common::{EntityMatcher, ExtractionRecord, Thresholds, Vocabulary, WeightedRatio};
use std::path::Path;
use tracing::{info, warn};

/// Loads location names. A missing or unreadable file degrades to an empty
/// vocabulary, so only drone labels can match.
pub fn load_locations(path: &Path) -> Vocabulary {
    match Vocabulary::from_file(path) {
        Ok(vocab) => {
            info!(path = %path.display(), count = vocab.len(), "locations loaded");
            vocab
        }
        Err(e) => {
            let err = MarkerOcrError::VocabularyLoad(format!("{}: {}", path.display(), e));
            warn!(error = %err, "continuing with drone-only matching");
            Vocabulary::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub normalize: NormalizeOptions,
    pub thresholds: Thresholds,
    /// Delete listed images after a successful write
    pub delete_processed: bool,
    pub show_progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            thresholds: Thresholds::default(),
            delete_processed: true,
            show_progress: false,
        }
    }
}

/// Outcome of one run
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub files_deleted: usize,
    pub records: Vec<ExtractionRecord>,
}

pub struct Pipeline<'a> {
    recognizer: &'a dyn TextRecognizer,
    matcher: EntityMatcher<WeightedRatio>,
    locations: Vocabulary,
    drones: Vocabulary,
    options: BatchOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        recognizer: &'a dyn TextRecognizer,
        locations: Vocabulary,
        drones: Vocabulary,
        options: BatchOptions,
    ) -> Self {
        Self {
            recognizer,
            matcher: EntityMatcher::new(WeightedRatio, options.thresholds),
            locations,
            drones,
            options,
        }
    }

    /// Runs the batch over `image_dir` and writes the table through `writer`.
    ///
    /// Deletes every listed image once the table is written (unless
    /// `delete_processed` is off). Per-file failures are logged and skipped.
    pub fn run(&self, image_dir: &Path, writer: &dyn TableWriter) -> Result<BatchSummary> {
        let images = scanner::scan_folder(image_dir)?;
        info!(dir = %image_dir.display(), count = images.len(), "images listed");

        let mut summary = BatchSummary {
            files_processed: images.len(),
            ..Default::default()
        };

        let progress = self.progress_bar(images.len() as u64);
        for image in &images {
            progress.set_message(image.file_name.clone());
            match self.process_file(image) {
                Ok(Some(record)) => {
                    progress.println(format!("  {} - {}", record.location, record.drone_type));
                    summary.records.push(record);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(file = %image.path.display(), error = %e, "skipping file");
                    summary.files_failed += 1;
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        writer.write(&summary.records)?;
        info!(output = %writer.location(), records = summary.records.len(), "table written");

        if self.options.delete_processed {
            summary.files_deleted = remove_images(&images);
        }

        Ok(summary)
    }

    /// Normalize, recognize and match a single image.
    pub fn process_file(&self, image: &ImageInfo) -> Result<Option<ExtractionRecord>> {
        info!(file = %image.path.display(), "processing");

        let gray = preprocess::normalize(&image.path, &self.options.normalize)?;
        let text = recognize_text(self.recognizer, &gray);
        info!(file = %image.file_name, text = %preview(&text), "text found");

        Ok(self.matcher.extract(&text, &self.locations, &self.drones))
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.options.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    }
}

/// Returns the number of files removed.
fn remove_images(images: &[ImageInfo]) -> usize {
    let mut removed = 0;
    for image in images {
        match std::fs::remove_file(&image.path) {
            Ok(()) => removed += 1,
            Err(e) => warn!(file = %image.path.display(), error = %e, "failed to remove image"),
        }
    }
    info!(removed, "processed images removed");
    removed
}
