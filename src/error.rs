use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkerOcrError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Failed to list {path}: {source}")]
    Enumeration {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to load image: {0}")]
    ImageLoad(String),

    #[error("Text recognition failed: {0}")]
    Recognition(String),

    #[error("Failed to load vocabulary: {0}")]
    VocabularyLoad(String),

    #[error("Failed to write output table: {0}")]
    Persistence(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarkerOcrError>;
