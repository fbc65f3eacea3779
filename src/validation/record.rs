use chrono::{Local, NaiveDate};

use crate::models::{DocumentRecord, RecordValidationResult, ValidationIssue, ValidationIssueType};
use crate::validation::checksum::verhoeff_is_valid;

/// Reports on an assembled record without changing it.
pub struct RecordValidator;

impl RecordValidator {
    pub fn validate(record: &DocumentRecord) -> RecordValidationResult {
        let today = Local::now().date_naive();
        Self::validate_as_of(record, today)
    }

    pub fn validate_as_of(record: &DocumentRecord, today: NaiveDate) -> RecordValidationResult {
        let mut issues = Vec::new();

        let checksum_valid = match &record.document_number {
            Some(number) if verhoeff_is_valid(number) => true,
            Some(number) => {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::Checksum,
                    message: format!("Document number {} fails the Verhoeff check", number),
                });
                false
            }
            None => {
                issues.push(missing("Document number"));
                false
            }
        };

        let date_of_birth_valid = match &record.date_of_birth {
            Some(dob) => match Self::parse_date(dob) {
                Some(date) if date <= today => true,
                Some(_) => {
                    issues.push(ValidationIssue {
                        issue_type: ValidationIssueType::Date,
                        message: format!("Date of birth {} is in the future", dob),
                    });
                    false
                }
                None => {
                    issues.push(ValidationIssue {
                        issue_type: ValidationIssueType::Date,
                        message: format!("Date of birth {} is not a calendar date", dob),
                    });
                    false
                }
            },
            None => {
                issues.push(missing("Date of birth"));
                false
            }
        };

        let postal_code_valid = match &record.postal_code {
            Some(pin) => match Self::postal_code_problem(pin) {
                None => true,
                Some(problem) => {
                    issues.push(ValidationIssue {
                        issue_type: ValidationIssueType::Format,
                        message: format!("Postal code {} {}", pin, problem),
                    });
                    false
                }
            },
            None => {
                issues.push(missing("Postal code"));
                false
            }
        };

        RecordValidationResult {
            is_valid: checksum_valid && date_of_birth_valid && postal_code_valid,
            checksum_valid,
            date_of_birth_valid,
            postal_code_valid,
            issues,
        }
    }

    // DD/MM/YYYY
    fn parse_date(date_str: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(date_str, "%d/%m/%Y").ok()
    }

    fn postal_code_problem(pin: &str) -> Option<&'static str> {
        if pin.len() != 6 || !pin.bytes().all(|b| b.is_ascii_digit()) {
            Some("is not a 6-digit number")
        } else if pin.starts_with('0') {
            Some("cannot start with 0")
        } else {
            None
        }
    }
}

fn missing(what: &str) -> ValidationIssue {
    ValidationIssue {
        issue_type: ValidationIssueType::Missing,
        message: format!("{} is missing", what),
    }
}
