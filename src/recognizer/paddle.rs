//! PaddleOCR backend (`ocr-rs`), enabled with the `paddle` feature.

use super::{TextRecognizer, TextSpan};
use crate::config::PaddleModels;
use crate::error::{MarkerOcrError, Result};
use image::{DynamicImage, GrayImage};

pub struct PaddleOcr {
    engine: ocr_rs::OcrEngine,
}

impl PaddleOcr {
    pub fn new(models: &PaddleModels) -> Result<Self> {
        let thread_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        let engine = ocr_rs::OcrEngine::new(
            &models.detection,
            &models.recognition,
            &models.charset,
            Some(ocr_rs::OcrEngineConfig {
                backend: ocr_rs::Backend::CPU,
                thread_count,
                precision_mode: ocr_rs::PrecisionMode::High,
                enable_parallel: thread_count > 1,
                min_result_confidence: 0.5,
                ..Default::default()
            }),
        )
        .map_err(|e| MarkerOcrError::Recognition(format!("failed to initialize PaddleOCR: {}", e)))?;

        Ok(Self { engine })
    }
}

impl TextRecognizer for PaddleOcr {
    fn recognize(&self, image: &GrayImage) -> Result<Vec<TextSpan>> {
        let rgb = DynamicImage::ImageLuma8(image.clone()).to_rgb8();
        let input = ocr_rs::preprocess::rgb_to_image(rgb.as_raw(), rgb.width(), rgb.height());

        let results = self
            .engine
            .recognize(&input)
            .map_err(|e| MarkerOcrError::Recognition(e.to_string()))?;

        Ok(results.into_iter().map(|r| TextSpan::new(r.text)).collect())
    }
}
