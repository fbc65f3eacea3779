use std::fmt;

use serde::Serialize;

use crate::processing::extractors;
use crate::processing::text::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Front,
    Back,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Front => write!(f, "front"),
            Side::Back => write!(f, "back"),
        }
    }
}

/// OCR output for one face of the card plus the side-local extraction attempts.
///
/// Only constructible from OCR text, so `raw_text` is always the normalized
/// form and the pre-extracted fields always agree with it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedSide {
    raw_text: String,
    document_number: Option<String>,
    name: Option<String>,
}

impl RecognizedSide {
    pub fn from_ocr_text(text: &str) -> Self {
        let raw_text = normalize(text);
        let document_number = extractors::extract_document_number(&raw_text);
        let name = extractors::extract_inline_name(&raw_text);

        RecognizedSide {
            raw_text,
            document_number,
            name,
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn document_number(&self) -> Option<&str> {
        self.document_number.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Merged result of both card sides. Every key is serialized, `null` when unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub document_number: Option<String>,
    pub name: Option<String>,
    pub date_of_birth: Option<String>, // DD/MM/YYYY
    pub gender: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationIssueType {
    Missing,
    Checksum,
    Date,
    Format,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordValidationResult {
    pub is_valid: bool,
    pub checksum_valid: bool,
    pub date_of_birth_valid: bool,
    pub postal_code_valid: bool,
    pub issues: Vec<ValidationIssue>,
}
