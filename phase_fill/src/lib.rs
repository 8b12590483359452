//! Fill missing phase-set (PS) values from the nearest annotated row.
//!
//! Steps, in order: validate the layout, parse coordinates, [classify](annotation::classify) rows,
//! [mark](schema_marker::mark_schema) the schema of incomplete rows,
//! [scan](neighbor_scan::scan) for the nearest donors, and [write](fill_values::write_values) the chosen values.
pub mod annotation;
pub mod config;
pub mod error;
pub mod fill_values;
pub mod neighbor_scan;
pub mod schema_marker;
#[macro_use]
extern crate log;

pub use annotation::AnnotationStatus;
pub use config::{PhaseSetFillConfig, StatusSource};
pub use error::FillError;

use definitions::{FieldLayout, Record, Table};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillSummary {
    pub rows: usize,
    pub annotated: usize,
    pub filled: usize,
    /// Rows that had no donor on either side and got the sentinel value.
    pub filled_from_sentinel: usize,
}

pub trait PhaseSetFill {
    fn fill_phase_set(&mut self, c: &PhaseSetFillConfig) -> Result<FillSummary, FillError>;
}

impl PhaseSetFill for Table {
    fn fill_phase_set(&mut self, c: &PhaseSetFillConfig) -> Result<FillSummary, FillError> {
        fill_records(&mut self.records, c)
    }
}

/// Parse the coordinate of every row. The first failure, by row index, is reported.
pub fn parse_coordinates(records: &[Record], layout: &FieldLayout) -> Result<Vec<i64>, FillError> {
    records
        .par_iter()
        .enumerate()
        .map(|(row, record)| {
            let raw = record.coordinate_str(layout);
            raw.trim()
                .parse::<i64>()
                .map_err(|_| FillError::invalid_coordinate(row, raw))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

pub fn fill_records(records: &mut [Record], c: &PhaseSetFillConfig) -> Result<FillSummary, FillError> {
    c.validate(records)?;
    let coordinates = parse_coordinates(records, &c.layout)?;
    debug!("FILL\tRows\t{}", records.len());
    let has_value = annotation::classify(records, c);
    let donor_status = match c.status_source {
        StatusSource::Data => has_value.clone(),
        StatusSource::Schema => annotation::donor_status(records, c),
    };
    let annotated = has_value.iter().filter(|st| st.is_annotated()).count();
    let donors = donor_status.iter().filter(|st| st.is_annotated()).count();
    debug!("FILL\tAnnotated\t{}", annotated);
    debug!("FILL\tDonors\t{}", donors);
    if c.status_source == StatusSource::Schema {
        let disagree = has_value
            .iter()
            .zip(donor_status.iter())
            .filter(|(x, y)| x != y)
            .count();
        if disagree > 0 {
            warn!("{} rows disagree between schema and data completeness", disagree);
        }
    }
    let fills = {
        let columns = neighbor_scan::scan(records, &coordinates, &donor_status, c);
        fill_values::select_values(&coordinates, &has_value, &columns)
    };
    let marked = schema_marker::mark_schema(records, &has_value, c);
    let count = fill_values::write_values(records, fills, c);
    debug_assert_eq!(marked, count.filled);
    if count.filled > 0 && count.filled == count.from_sentinel {
        warn!("No donor row found. All {} rows were filled with the sentinel value.", count.filled);
    }
    let summary = FillSummary {
        rows: records.len(),
        annotated,
        filled: count.filled,
        filled_from_sentinel: count.from_sentinel,
    };
    info!(
        "Rows:{}\tAnnotated:{}\tFilled:{}\tSentinel:{}",
        summary.rows, summary.annotated, summary.filled, summary.filled_from_sentinel
    );
    Ok(summary)
}
