use crate::error::{MarkerOcrError, Result};
use crate::ocr_backend::OcrBackend;
use marker_ocr_common::{matcher::Thresholds, Vocabulary, DEFAULT_DRONE_VOCABULARY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overrides `tesseract_path` when set.
pub const TESSERACT_ENV: &str = "MARKER_OCR_TESSERACT";

/// PaddleOCR model files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaddleModels {
    pub detection: PathBuf,
    pub recognition: PathBuf,
    pub charset: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub image_dir: PathBuf,
    pub locations_file: PathBuf,
    pub output_csv: PathBuf,
    pub processed_dir: PathBuf,
    pub save_processed: bool,
    pub mask_dark_text: bool,
    pub languages: Vec<String>,
    pub drone_vocabulary: Vec<String>,
    pub location_threshold: u8,
    pub drone_threshold: u8,
    pub backend: OcrBackend,
    pub tesseract_path: PathBuf,
    pub paddle: Option<PaddleModels>,
}

impl Default for Config {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            image_dir: PathBuf::from("data/raw-data/map-parts"),
            locations_file: PathBuf::from("data/reference-data/locations.txt"),
            output_csv: PathBuf::from("output/csv/extracted_data.csv"),
            processed_dir: PathBuf::from("output/images/map-parts-processed"),
            save_processed: false,
            mask_dark_text: false,
            languages: vec!["uk".into(), "en".into()],
            drone_vocabulary: DEFAULT_DRONE_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            location_threshold: thresholds.location,
            drone_threshold: thresholds.drone,
            backend: OcrBackend::Tesseract,
            tesseract_path: PathBuf::from("tesseract"),
            paddle: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MarkerOcrError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("marker-ocr").join("config.json"))
    }

    pub fn tesseract_path(&self) -> PathBuf {
        // env wins
        match std::env::var_os(TESSERACT_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.tesseract_path.clone(),
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            location: self.location_threshold,
            drone: self.drone_threshold,
        }
    }

    pub fn drones(&self) -> Vocabulary {
        self.drone_vocabulary.iter().map(String::as_str).collect()
    }
}
