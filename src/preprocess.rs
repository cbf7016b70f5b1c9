//! Image normalization before OCR
//!
//! Map labels are small, so images are upscaled 2x with bicubic-class
//! interpolation and reduced to a single luminance channel.

use crate::error::{MarkerOcrError, Result};
use image::imageops::FilterType;
use image::GrayImage;
use imageproc::contrast::{threshold, ThresholdType};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const UPSCALE_FACTOR: u32 = 2;

/// Pixels brighter than this are treated as map background.
pub const DARK_TEXT_THRESHOLD: u8 = 180;

#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Diagnostic copy of each normalized image
    pub save_dir: Option<PathBuf>,
    /// Blank out light pixels, keeping dark label text
    pub mask_dark_text: bool,
}

pub fn normalize(path: &Path, options: &NormalizeOptions) -> Result<GrayImage> {
    let img = image::open(path)
        .map_err(|e| MarkerOcrError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let (width, height) = (img.width(), img.height());
    let (target_w, target_h) = width
        .checked_mul(UPSCALE_FACTOR)
        .zip(height.checked_mul(UPSCALE_FACTOR))
        .ok_or_else(|| {
            MarkerOcrError::ImageLoad(format!("{}: {}x{} too large to upscale", path.display(), width, height))
        })?;

    let mut gray = img
        .resize_exact(target_w, target_h, FilterType::CatmullRom)
        .to_luma8();

    if options.mask_dark_text {
        gray = mask_dark_text(&gray, DARK_TEXT_THRESHOLD);
    }

    if let Some(dir) = &options.save_dir {
        save_processed(&gray, dir, path);
    }

    Ok(gray)
}

/// Keeps pixels at or below `level`, zeroes the rest.
pub fn mask_dark_text(gray: &GrayImage, level: u8) -> GrayImage {
    let mask = threshold(gray, level, ThresholdType::BinaryInverted);
    let mut out = gray.clone();
    for (pixel, m) in out.pixels_mut().zip(mask.pixels()) {
        if m.0[0] == 0 {
            pixel.0[0] = 0;
        }
    }
    out
}

/// Best effort: failures are logged and never stop the pipeline.
fn save_processed(gray: &GrayImage, dir: &Path, source: &Path) {
    let Some(file_name) = source.file_name() else {
        return;
    };
    let save_path = dir.join(file_name);

    let result = std::fs::create_dir_all(dir)
        .map_err(|e| e.to_string())
        .and_then(|_| gray.save(&save_path).map_err(|e| e.to_string()));

    match result {
        Ok(()) => info!(path = %save_path.display(), "processed image saved"),
        Err(e) => warn!(path = %save_path.display(), error = %e, "failed to save processed image"),
    }
}
