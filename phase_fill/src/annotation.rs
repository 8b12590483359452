//! Classify rows by whether they already carry the full annotation.
use crate::config::{PhaseSetFillConfig, StatusSource};
use definitions::Record;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationStatus {
    Annotated,
    Missing,
}

impl AnnotationStatus {
    pub fn is_annotated(&self) -> bool {
        matches!(self, AnnotationStatus::Annotated)
    }
}

/// True if `field` has exactly `count` separators. The tokens themselves are not inspected.
pub fn is_annotated(field: &str, separator: char, count: usize) -> bool {
    field.matches(separator).count() == count
}

/// The last `separator`-delimited token of `field`. The whole field if it has no separator.
pub fn trailing_value(field: &str, separator: char) -> &str {
    field.rsplit(separator).next().unwrap_or(field)
}

fn status_of(field: &str, c: &PhaseSetFillConfig) -> AnnotationStatus {
    match is_annotated(field, c.separator, c.annotated_separators) {
        true => AnnotationStatus::Annotated,
        false => AnnotationStatus::Missing,
    }
}

/// Per-row status used to decide which rows get a value appended.
/// Read from the field named by `c.status_source`.
pub fn classify(records: &[Record], c: &PhaseSetFillConfig) -> Vec<AnnotationStatus> {
    let layout = &c.layout;
    match c.status_source {
        StatusSource::Data => donor_status(records, c),
        StatusSource::Schema => records
            .par_iter()
            .map(|record| status_of(record.schema(layout), c))
            .collect(),
    }
}

/// Per-row donor eligibility. Always read from the data field.
pub fn donor_status(records: &[Record], c: &PhaseSetFillConfig) -> Vec<AnnotationStatus> {
    let layout = &c.layout;
    records
        .par_iter()
        .map(|record| status_of(record.data(layout), c))
        .collect()
}
