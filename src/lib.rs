pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod ocr_backend;
pub mod pipeline;
pub mod preprocess;
pub mod recognizer;
pub mod scanner;
