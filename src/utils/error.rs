// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Errors raised while opening the entry list document
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract text from PDF {path}: {message}")]
    Extract { path: PathBuf, message: String },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("PDF extraction failed: {0}")]
    Pdf(#[from] PdfError),

    #[error("Output failed: {0}")]
    Output(#[from] OutputError),
}
