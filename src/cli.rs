use crate::ocr_backend::OcrBackend;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marker-ocr")]
#[command(about = "Extract locations and drone types from annotated map screenshots", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process every image in a folder and write the CSV table.
    ///
    /// WARNING: after the table is written, all listed images are DELETED
    /// from the input folder (use --keep-images to prevent this).
    Run {
        /// Image folder (default: from config)
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Location list, one name per line
        #[arg(short, long)]
        locations: Option<PathBuf>,

        /// Output CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Drone vocabulary entry (repeatable, replaces the default list)
        #[arg(short, long = "drone")]
        drones: Vec<String>,

        /// Save normalized images for inspection
        #[arg(long)]
        save_processed: bool,

        /// Folder for normalized images
        #[arg(long)]
        processed_dir: Option<PathBuf>,

        /// Keep only dark label text before OCR
        #[arg(long)]
        mask_dark_text: bool,

        /// OCR engine
        #[arg(long, value_enum)]
        backend: Option<OcrBackend>,

        /// Do not delete images after the run
        #[arg(long)]
        keep_images: bool,
    },

    /// Match a piece of text against the vocabularies
    Match {
        /// Recognized text
        #[arg(short, long)]
        text: String,

        /// Location list, one name per line
        #[arg(short, long)]
        locations: Option<PathBuf>,

        /// Drone vocabulary entry (repeatable)
        #[arg(short, long = "drone")]
        drones: Vec<String>,
    },

    /// Transliterate Latin text to Ukrainian Cyrillic
    Transliterate {
        #[arg(required = true)]
        text: String,
    },

    /// Show or initialize the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long)]
        show: bool,

        /// Write the defaults to the config file
        #[arg(long)]
        init: bool,
    },
}
