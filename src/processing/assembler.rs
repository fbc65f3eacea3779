use crate::models::{DocumentRecord, Field, RecognizedSide, Side};
use crate::processing::events::{ExtractionEvent, ExtractionObserver, Source};
use crate::processing::extractors;

/// One link of a fallback chain.
enum Candidate<'a> {
    /// Value already extracted while the side was recognized.
    PreExtracted(Option<&'a str>),
    /// Run the field rule against the side's normalized text.
    Rule(&'a str),
}

struct Step<'a> {
    source: Source,
    candidate: Candidate<'a>,
}

impl<'a> Step<'a> {
    fn pre_extracted(side: Side, rule: Field, value: Option<&'a str>) -> Self {
        Step {
            source: Source { side, rule },
            candidate: Candidate::PreExtracted(value),
        }
    }

    fn rule(side: Side, rule: Field, recognized: &'a RecognizedSide) -> Self {
        Step {
            source: Source { side, rule },
            candidate: Candidate::Rule(recognized.raw_text()),
        }
    }

    fn evaluate(&self) -> Option<String> {
        match self.candidate {
            Candidate::PreExtracted(value) => value.map(str::to_string),
            Candidate::Rule(text) => extractors::rule(self.source.rule).extract(text),
        }
    }
}

/// Merge both recognized sides into one record. Never fails; anything that
/// cannot be determined is `None`.
pub fn assemble(
    front: &RecognizedSide,
    back: &RecognizedSide,
    observer: &dyn ExtractionObserver,
) -> DocumentRecord {
    DocumentRecord {
        document_number: resolve(
            Field::DocumentNumber,
            &[
                Step::pre_extracted(Side::Front, Field::DocumentNumber, front.document_number()),
                Step::pre_extracted(Side::Back, Field::DocumentNumber, back.document_number()),
            ],
            observer,
        ),
        name: resolve(
            Field::Name,
            &[
                Step::pre_extracted(Side::Front, Field::Name, front.name()),
                Step::rule(Side::Front, Field::LabeledName, front),
            ],
            observer,
        ),
        date_of_birth: resolve(
            Field::DateOfBirth,
            &[Step::rule(Side::Front, Field::DateOfBirth, front)],
            observer,
        ),
        gender: resolve(
            Field::Gender,
            &[Step::rule(Side::Front, Field::Gender, front)],
            observer,
        ),
        address: resolve(
            Field::Address,
            &[Step::rule(Side::Back, Field::Address, back)],
            observer,
        ),
        postal_code: resolve(
            Field::PostalCode,
            &[Step::rule(Side::Back, Field::PostalCode, back)],
            observer,
        ),
    }
}

/// Walk the chain in order and stop at the first step that yields a value.
fn resolve(field: Field, chain: &[Step], observer: &dyn ExtractionObserver) -> Option<String> {
    let resolved = chain
        .iter()
        .find_map(|step| step.evaluate().map(|value| (step.source, value)));

    observer.on_field(&ExtractionEvent {
        field,
        source: resolved.as_ref().map(|(source, _)| *source),
    });

    resolved.map(|(_, value)| value)
}
