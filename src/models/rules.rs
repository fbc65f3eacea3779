use std::fmt;

use regex::{Captures, Regex};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    DocumentNumber,
    Name,
    LabeledName,
    DateOfBirth,
    Gender,
    Address,
    PostalCode,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Field::DocumentNumber => "document_number",
            Field::Name => "name",
            Field::LabeledName => "labeled_name",
            Field::DateOfBirth => "date_of_birth",
            Field::Gender => "gender",
            Field::Address => "address",
            Field::PostalCode => "postal_code",
        };
        write!(f, "{}", label)
    }
}

/// One extraction rule: a single pattern, first match wins, then a
/// post-processing step that may still reject the match.
pub struct FieldRule {
    pub field: Field,
    pub pattern: Regex,
    postprocess: fn(&Captures) -> Option<String>,
}

impl FieldRule {
    pub fn new(field: Field, pattern: Regex, postprocess: fn(&Captures) -> Option<String>) -> Self {
        FieldRule {
            field,
            pattern,
            postprocess,
        }
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        let captures = self.pattern.captures(text)?;
        (self.postprocess)(&captures)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}
