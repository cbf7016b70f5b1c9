//! Text recognition
//!
//! The OCR engine is built once per run and borrowed for every image.
//! Engine failures are contained here: a failed image yields empty text.

mod tesseract;
#[cfg(feature = "paddle")]
mod paddle;

pub use tesseract::TesseractCli;
#[cfg(feature = "paddle")]
pub use paddle::PaddleOcr;

use crate::error::Result;
use image::GrayImage;
use tracing::{debug, warn};

/// Label languages expected on the maps
pub const DEFAULT_LANGUAGES: [&str; 2] = ["uk", "en"];

/// One detected text fragment
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    /// 0.0-1.0 when the engine reports it
    pub confidence: Option<f32>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }
}

pub trait TextRecognizer {
    /// Spans in the engine's detection order.
    fn recognize(&self, image: &GrayImage) -> Result<Vec<TextSpan>>;
}

/// Joins every span with single spaces. Errors become empty text.
pub fn recognize_text(engine: &dyn TextRecognizer, image: &GrayImage) -> String {
    match engine.recognize(image) {
        Ok(spans) => {
            let text = spans
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            debug!(spans = spans.len(), preview = %preview(&text), "OCR completed");
            text
        }
        Err(e) => {
            warn!(error = %e, "failed to extract text");
            String::new()
        }
    }
}

/// First 30 characters, for progress output.
pub fn preview(text: &str) -> String {
    text.chars().take(30).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkerOcrError;

    struct Fixed(Vec<&'static str>);

    impl TextRecognizer for Fixed {
        fn recognize(&self, _image: &GrayImage) -> Result<Vec<TextSpan>> {
            Ok(self.0.iter().map(|t| TextSpan::new(*t)).collect())
        }
    }

    struct Failing;

    impl TextRecognizer for Failing {
        fn recognize(&self, _image: &GrayImage) -> Result<Vec<TextSpan>> {
            Err(MarkerOcrError::Recognition("engine crashed".into()))
        }
    }

    #[test]
    fn test_spans_joined_in_engine_order() {
        let engine = Fixed(vec!["ORLAN", "над", "Kyiv"]);
        let text = recognize_text(&engine, &GrayImage::new(2, 2));
        assert_eq!(text, "ORLAN над Kyiv");
    }

    #[test]
    fn test_no_spans_is_empty() {
        let text = recognize_text(&Fixed(vec![]), &GrayImage::new(2, 2));
        assert!(text.is_empty());
    }

    #[test]
    fn test_engine_error_is_empty() {
        let text = recognize_text(&Failing, &GrayImage::new(2, 2));
        assert!(text.is_empty());
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("короткий"), "короткий");
        assert_eq!(preview(&"я".repeat(40)).chars().count(), 30);
    }
}
