//! Tesseract CLI backend
//!
//! Each image is written to a temporary PNG and passed to
//! `tesseract <png> stdout -l <langs> tsv`. Word rows of the TSV become spans.

use super::{TextRecognizer, TextSpan};
use crate::error::{MarkerOcrError, Result};
use image::{GrayImage, ImageFormat};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// TSV level of a single word
const WORD_LEVEL: &str = "5";
const TSV_COLUMNS: usize = 12;

#[derive(Debug, Clone)]
pub struct TesseractCli {
    program: PathBuf,
    languages: String,
}

impl TesseractCli {
    /// Fails when the executable cannot be started.
    pub fn new(program: impl Into<PathBuf>, languages: &[String]) -> Result<Self> {
        let program = program.into();

        let output = Command::new(&program)
            .arg("--version")
            .output()
            .map_err(|e| {
                MarkerOcrError::Recognition(format!("cannot run {}: {}", program.display(), e))
            })?;

        let version = String::from_utf8_lossy(&output.stdout);
        let version = version.lines().next().unwrap_or("unknown version");

        let languages = tesseract_languages(languages);
        info!(program = %program.display(), version, languages = %languages, "tesseract ready");

        Ok(Self { program, languages })
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }

    fn run(&self, input: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .arg(input)
            .arg("stdout")
            .args(["-l", self.languages.as_str(), "tsv"])
            .output()
            .map_err(|e| MarkerOcrError::Recognition(format!("tesseract failed to start: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MarkerOcrError::Recognition(format!(
                "tesseract failed (code {:?}): {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl TextRecognizer for TesseractCli {
    fn recognize(&self, image: &GrayImage) -> Result<Vec<TextSpan>> {
        let temp = tempfile::Builder::new()
            .prefix("marker-ocr-")
            .suffix(".png")
            .tempfile()?;

        image
            .save_with_format(temp.path(), ImageFormat::Png)
            .map_err(|e| MarkerOcrError::Recognition(format!("failed to write OCR input: {}", e)))?;

        let tsv = self.run(temp.path())?;
        Ok(parse_tsv(&tsv))
    }
}

/// `uk`/`en` style codes to Tesseract's `ukr+eng`.
fn tesseract_languages(codes: &[String]) -> String {
    codes
        .iter()
        .map(|code| match code.as_str() {
            "uk" => "ukr",
            "en" => "eng",
            "ru" => "rus",
            "pl" => "pol",
            other => other,
        })
        .collect::<Vec<_>>()
        .join("+")
}

/// Word rows with non-blank text, in output order.
fn parse_tsv(tsv: &str) -> Vec<TextSpan> {
    tsv.lines()
        .filter_map(|line| {
            let cols: Vec<&str> = line.splitn(TSV_COLUMNS, '\t').collect();
            if cols.len() < TSV_COLUMNS || cols[0] != WORD_LEVEL {
                return None;
            }

            let text = cols[TSV_COLUMNS - 1].trim();
            if text.is_empty() {
                return None;
            }

            let confidence = cols[10]
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|c| *c >= 0.0)
                .map(|c| c / 100.0);

            Some(TextSpan {
                text: text.to_string(),
                confidence,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext
1\t1\t0\t0\t0\t0\t0\t0\t400\t200\t-1\t
4\t1\t1\t1\t1\t0\t10\t10\t200\t20\t-1\t
5\t1\t1\t1\t1\t1\t10\t10\t60\t20\t91.5\tORLAN
5\t1\t1\t1\t1\t2\t80\t10\t40\t20\t88\tнад
5\t1\t1\t1\t1\t3\t130\t10\t50\t20\t95\t  
5\t1\t1\t1\t1\t4\t190\t10\t50\t20\t76.25\tKyiv
";

    #[test]
    fn test_parse_tsv_words_only() {
        let spans = parse_tsv(SAMPLE);
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["ORLAN", "над", "Kyiv"]);
        assert!((spans[0].confidence.unwrap() - 0.915).abs() < 1e-6);
        assert!((spans[2].confidence.unwrap() - 0.7625).abs() < 1e-6);
    }

    #[test]
    fn test_parse_tsv_empty() {
        assert!(parse_tsv("").is_empty());
        assert!(parse_tsv("level\tpage_num\n").is_empty());
    }

    #[test]
    fn test_tesseract_languages() {
        let codes = vec!["uk".to_string(), "en".to_string()];
        assert_eq!(tesseract_languages(&codes), "ukr+eng");

        let codes = vec!["deu".to_string()];
        assert_eq!(tesseract_languages(&codes), "deu");
    }

    #[test]
    fn test_missing_executable() {
        let result = TesseractCli::new("/nonexistent/bin/tesseract", &[]);
        assert!(matches!(result, Err(MarkerOcrError::Recognition(_))));
    }
}
