use std::io::Write;

use log::debug;
use tempfile::NamedTempFile;
use tesseract::Tesseract;

use crate::processing::image::ImageProcessor;
use crate::utils::ReaderError;

pub const DEFAULT_LANGUAGE: &str = "eng";
pub const DEFAULT_CHAR_WHITELIST: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Anything that can turn an image buffer into recognized text.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &[u8]) -> Result<String, ReaderError>;
}

#[derive(Debug, Clone)]
pub struct OcrSettings {
    pub language: String,
    pub char_whitelist: String,
    /// Directory holding the `.traineddata` files; tesseract falls back to
    /// `TESSDATA_PREFIX` when unset.
    pub tessdata_path: Option<String>,
    pub preprocess: bool,
}

impl Default for OcrSettings {
    fn default() -> Self {
        OcrSettings {
            language: DEFAULT_LANGUAGE.to_string(),
            char_whitelist: DEFAULT_CHAR_WHITELIST.to_string(),
            tessdata_path: None,
            preprocess: true,
        }
    }
}

pub struct TesseractEngine {
    settings: OcrSettings,
}

impl TesseractEngine {
    pub fn new(settings: OcrSettings) -> Self {
        TesseractEngine { settings }
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &[u8]) -> Result<String, ReaderError> {
        let prepared;
        let image = if self.settings.preprocess {
            prepared = ImageProcessor::preprocess(image)?;
            prepared.as_slice()
        } else {
            image
        };

        // Tesseract reads from a path, so hand it a temporary file
        let mut temp_file = NamedTempFile::new()
            .map_err(|e| ReaderError::Engine(format!("Failed to create temp file: {}", e)))?;
        temp_file
            .write_all(image)
            .map_err(|e| ReaderError::Engine(format!("Failed to write to temp file: {}", e)))?;
        let path_str = temp_file
            .path()
            .to_str()
            .ok_or_else(|| ReaderError::Engine("Failed to convert path to string".to_string()))?;

        let mut tess = Tesseract::new(
            self.settings.tessdata_path.as_deref(),
            Some(self.settings.language.as_str()),
        )
        .map_err(|e| ReaderError::Engine(format!("Tesseract init error: {}", e)))?
        .set_variable("tessedit_char_whitelist", &self.settings.char_whitelist)
        .map_err(|e| ReaderError::Engine(format!("Tesseract set variable error: {}", e)))?
        .set_image(path_str)
        .map_err(|e| ReaderError::Engine(format!("Tesseract set image error: {}", e)))?;

        let text = tess
            .get_text()
            .map_err(|e| ReaderError::Engine(format!("Tesseract error: {}", e)))?;

        debug!("OCR produced {} characters", text.len());
        Ok(text)
    }
}
