use thiserror::Error;

use crate::models::Side;

#[derive(Debug, Error)]
pub enum ReaderError {
    /// The OCR engine (or the image decoder feeding it) rejected a buffer.
    #[error("OCR engine error: {0}")]
    Engine(String),

    /// The upload was rejected before reaching the engine.
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The only failure `DocumentReader::extract_document` reports.
    #[error("Processing failed on {side} side: {details}")]
    Processing { side: Side, details: String },
}

impl ReaderError {
    pub fn processing(side: Side, source: impl std::fmt::Display) -> Self {
        ReaderError::Processing {
            side,
            details: source.to_string(),
        }
    }

    /// Underlying message without the "Processing failed" prefix.
    pub fn details(&self) -> String {
        match self {
            ReaderError::Processing { details, .. } => details.clone(),
            other => other.to_string(),
        }
    }
}
