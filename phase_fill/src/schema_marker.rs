use crate::annotation::AnnotationStatus;
use crate::config::PhaseSetFillConfig;
use definitions::Record;
use rayon::prelude::*;

/// Append the schema suffix to every row whose status is missing.
/// Returns the number of rows marked.
pub fn mark_schema(
    records: &mut [Record],
    status: &[AnnotationStatus],
    c: &PhaseSetFillConfig,
) -> usize {
    assert_eq!(records.len(), status.len());
    let layout = &c.layout;
    records
        .par_iter_mut()
        .zip(status.par_iter())
        .filter(|(_, st)| !st.is_annotated())
        .map(|(record, _)| record.schema_mut(layout).push_str(&c.suffix))
        .count()
}
