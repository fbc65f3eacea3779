// Field extraction rules for normalized Aadhar OCR text.
// Each field has exactly one pattern; the first match wins and a failed
// match (or a rejected capture) is simply `None`.
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::models::{Field, FieldRule};

// Tokens that end a labeled name when the OCR output runs fields together
const FIELD_LABELS: &[&str] = &[
    "DOB", "YOB", "YEAR", "BIRTH", "GENDER", "SEX", "MALE", "FEMALE", "OTHER", "FATHER", "ADDRESS",
];

lazy_static! {
    // 12 ASCII digits, optionally in 4-digit groups. A date's year
    // ("01/01/1985 1234 ...") must not start the number, so the character
    // before it cannot be a word character or a date separator.
    static ref DOCUMENT_NUMBER_RULE: FieldRule = FieldRule::new(
        Field::DocumentNumber,
        Regex::new(r"(?:^|[^\w/.-])([0-9]{4}\s?[0-9]{4}\s?[0-9]{4})\b").unwrap(),
        strip_whitespace,
    );

    static ref INLINE_NAME_RULE: FieldRule = FieldRule::new(
        Field::Name,
        Regex::new(r"[A-Z][a-z]+ [A-Z][a-z]+").unwrap(),
        whole_match,
    );

    static ref LABELED_NAME_RULE: FieldRule = FieldRule::new(
        Field::LabeledName,
        Regex::new(r"(?i:name):\s?([A-Za-z\s]+)").unwrap(),
        name_until_next_label,
    );

    static ref DATE_OF_BIRTH_RULE: FieldRule = FieldRule::new(
        Field::DateOfBirth,
        Regex::new(r"DOB[:\s~]*([0-9]{2}/[0-9]{2}/[0-9]{4})").unwrap(),
        first_group,
    );

    static ref GENDER_RULE: FieldRule = FieldRule::new(
        Field::Gender,
        Regex::new(r"(?i)\b(Male|Female|Other)\b").unwrap(),
        first_group,
    );

    // Back side: "Addresss/" label, a short street phrase, then the "wa:" label
    // and a "locality, state" fragment. Both halves are required; a PIN
    // trailing the state is dropped.
    static ref ADDRESS_RULE: FieldRule = FieldRule::new(
        Field::Address,
        Regex::new(r"Addresss/\W*(\w[\w\s]+).*?wa:\s([^,]+,[^,]+)").unwrap(),
        join_address,
    );

    static ref POSTAL_CODE_RULE: FieldRule = FieldRule::new(
        Field::PostalCode,
        Regex::new(r"\b[0-9]{6}\b").unwrap(),
        whole_match,
    );

    static ref TRAILING_POSTAL_CODE: Regex = Regex::new(r"\s+[0-9]{6}$").unwrap();
}

/// Look up the rule that extracts `field`.
pub fn rule(field: Field) -> &'static FieldRule {
    match field {
        Field::DocumentNumber => &*DOCUMENT_NUMBER_RULE,
        Field::Name => &*INLINE_NAME_RULE,
        Field::LabeledName => &*LABELED_NAME_RULE,
        Field::DateOfBirth => &*DATE_OF_BIRTH_RULE,
        Field::Gender => &*GENDER_RULE,
        Field::Address => &*ADDRESS_RULE,
        Field::PostalCode => &*POSTAL_CODE_RULE,
    }
}

pub fn extract_document_number(text: &str) -> Option<String> {
    DOCUMENT_NUMBER_RULE.extract(text)
}

/// Two consecutive capitalized words anywhere in the text.
pub fn extract_inline_name(text: &str) -> Option<String> {
    INLINE_NAME_RULE.extract(text)
}

/// Text after a `Name:` label, cut at the next field label.
pub fn extract_labeled_name(text: &str) -> Option<String> {
    LABELED_NAME_RULE.extract(text)
}

pub fn extract_date_of_birth(text: &str) -> Option<String> {
    DATE_OF_BIRTH_RULE.extract(text)
}

/// Returns the gender exactly as it appears in the text ("female" stays lowercase).
pub fn extract_gender(text: &str) -> Option<String> {
    GENDER_RULE.extract(text)
}

pub fn extract_address(text: &str) -> Option<String> {
    ADDRESS_RULE.extract(text)
}

pub fn extract_postal_code(text: &str) -> Option<String> {
    POSTAL_CODE_RULE.extract(text)
}

fn whole_match(captures: &Captures) -> Option<String> {
    captures.get(0).map(|m| m.as_str().to_string())
}

fn first_group(captures: &Captures) -> Option<String> {
    captures.get(1).map(|m| m.as_str().to_string())
}

fn strip_whitespace(captures: &Captures) -> Option<String> {
    let value = captures.get(1)?.as_str();
    Some(value.chars().filter(|c| !c.is_whitespace()).collect())
}

fn name_until_next_label(captures: &Captures) -> Option<String> {
    let words: Vec<&str> = captures
        .get(1)?
        .as_str()
        .split_whitespace()
        .take_while(|word| !is_field_label(word))
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn join_address(captures: &Captures) -> Option<String> {
    let street = captures.get(1)?.as_str().trim();
    let locality = TRAILING_POSTAL_CODE.replace(captures.get(2)?.as_str().trim(), "");
    let (place, region) = locality.split_once(',')?;
    let (place, region) = (place.trim(), region.trim());
    if street.is_empty() || place.is_empty() || region.is_empty() {
        return None;
    }
    Some(format!("{}, {}, {}", street, place, region))
}

fn is_field_label(word: &str) -> bool {
    FIELD_LABELS
        .iter()
        .any(|label| label.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_table() {
        let cases: &[(Field, &str, Option<&str>)] = &[
            (Field::DocumentNumber, "UID 1234 5678 9012", Some("123456789012")),
            (Field::DocumentNumber, "123456789012", Some("123456789012")),
            (Field::DocumentNumber, "1234 56789012 end", Some("123456789012")),
            (Field::DocumentNumber, "1234 5678 901", None),
            (Field::DocumentNumber, "1234567890123", None),
            (Field::DocumentNumber, "DOB:01/01/1985 1234 5678 9012", Some("123456789012")),
            (Field::Name, "GOVERNMENT OF INDIA Ravi Kumar", Some("Ravi Kumar")),
            (Field::Name, "RAVI KUMAR", None),
            (Field::LabeledName, "Name: Ravi Kumar", Some("Ravi Kumar")),
            (Field::LabeledName, "NAME: ARUN KUMAR DOB:01/01/1985", Some("ARUN KUMAR")),
            (Field::LabeledName, "Name:", None),
            (Field::LabeledName, "no label here", None),
            (Field::DateOfBirth, "DOB: 05/06/1990", Some("05/06/1990")),
            (Field::DateOfBirth, "DOB~ 05/06/1990", Some("05/06/1990")),
            (Field::DateOfBirth, "DOB:01/01/1985", Some("01/01/1985")),
            (Field::DateOfBirth, "DOB unknown", None),
            (Field::DateOfBirth, "05/06/1990", None),
            (Field::Gender, "Male", Some("Male")),
            (Field::Gender, "sex FEMALE", Some("FEMALE")),
            (Field::Gender, "female", Some("female")),
            (Field::Gender, "Others", None),
            (Field::Gender, "Femaleness", None),
            (Field::PostalCode, "Karnataka 560001", Some("560001")),
            (Field::PostalCode, "PIN 5600011", None),
            (Field::PostalCode, "no digits", None),
            // only ASCII digits count
            (Field::PostalCode, "पिन ५६०००१", None),
            (Field::PostalCode, "٥٦٠٠٠١", None),
            (Field::DocumentNumber, "१२३४ ५६७८ ९०१२", None),
            (Field::DateOfBirth, "DOB: ०५/०६/१९९०", None),
        ];

        for (field, text, expected) in cases {
            let actual = rule(*field).extract(text);
            assert_eq!(
                actual.as_deref(),
                *expected,
                "{} on {:?}",
                field,
                text
            );
        }
    }

    #[test]
    fn test_document_number_strips_group_spaces() {
        assert_eq!(
            extract_document_number("1234 5678 9012"),
            Some("123456789012".to_string())
        );
    }

    #[test]
    fn test_address_joins_both_fragments() {
        let text = "Addresss/ 12 Park Street wa: Bangalore, Karnataka 560001";
        assert_eq!(
            extract_address(text),
            Some("12 Park Street, Bangalore, Karnataka".to_string())
        );
    }

    #[test]
    fn test_address_keeps_digits_inside_locality() {
        assert_eq!(
            extract_address("Addresss/ House 4 wa: Flat 3B, Sector 12, Noida"),
            Some("House 4, Flat 3B, Sector 12".to_string())
        );
        assert_eq!(
            extract_address("Addresss/ 7 MG Road wa: Ward 5, Pune 411001"),
            Some("7 MG Road, Ward 5, Pune".to_string())
        );
    }

    #[test]
    fn test_address_requires_both_fragments() {
        // street only
        assert_eq!(extract_address("Addresss/ 12 Park Street Bangalore"), None);
        // locality only
        assert_eq!(extract_address("wa: Bangalore, Karnataka"), None);
        // locality without a comma-separated second part
        assert_eq!(extract_address("Addresss/ 12 Park Street wa: Bangalore 560001"), None);
        assert_eq!(extract_address("Addresss/ 12 Park Street wa: Bangalore, 560001"), None);
    }

    #[test]
    fn test_gender_any_case_is_found() {
        for text in ["female", "FEMALE", "Female", "fEmAlE"] {
            let gender = extract_gender(text).expect("gender present");
            assert!(gender.eq_ignore_ascii_case("female"));
        }
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            extract_document_number("1111 2222 3333 and 4444 5555 6666"),
            Some("111122223333".to_string())
        );
        assert_eq!(extract_gender("Male Female"), Some("Male".to_string()));
    }
}
