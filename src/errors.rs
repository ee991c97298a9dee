// ABOUTME: Error types for the markdeck application
// ABOUTME: Provides structured error handling for each stage of the pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Slide does not start with a metadata block: {0:?}")]
    MetaMissingError(String),

    #[error("Unterminated metadata block in slide: {0:?}")]
    MetaUnterminatedError(String),

    #[error("Failed to parse slide metadata: {0}")]
    MetaParseError(#[from] serde_yaml::Error),

    #[error("Slide metadata has no string `url` key: {0:?}")]
    MissingUrlError(String),

    #[error("Duplicate slide url: {0}")]
    DuplicateUrlError(String),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our DeckError
impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
