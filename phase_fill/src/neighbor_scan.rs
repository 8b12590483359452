//! Nearest donor on each side of every row.
//!
//! Donors are searched by position in the table, not by coordinate: the table is
//! assumed to be sorted. The forward pass gives, for each row, the last donor at or
//! before it, and the backward pass the first donor at or after it. A donor sees itself.
//! A side without any donor is `None`; it falls back to [Donor::sentinel] only when
//! neither side has one.
use crate::annotation::{trailing_value, AnnotationStatus};
use crate::config::PhaseSetFillConfig;
use definitions::Record;

/// Value given when there is no donor on either side.
pub const SENTINEL_VALUE: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Donor<'a> {
    pub coordinate: i64,
    pub value: &'a str,
}

impl<'a> Donor<'a> {
    pub fn new(coordinate: i64, value: &'a str) -> Self {
        Self { coordinate, value }
    }
    pub fn sentinel() -> Self {
        Self {
            coordinate: 0,
            value: SENTINEL_VALUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorColumns<'a> {
    pub previous: Vec<Option<Donor<'a>>>,
    pub next: Vec<Option<Donor<'a>>>,
}

impl<'a> DonorColumns<'a> {
    pub fn len(&self) -> usize {
        self.previous.len()
    }
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }
}

// Running-donor accumulation over rows in the given order.
fn sweep<'a, I>(rows: I) -> Vec<Option<Donor<'a>>>
where
    I: Iterator<Item = (i64, AnnotationStatus, &'a str)>,
{
    let mut current = None;
    rows.map(|(coordinate, status, value)| {
        if status.is_annotated() {
            current = Some(Donor::new(coordinate, value));
        }
        current
    })
    .collect()
}

/// Compute previous/next donors for every row. `coordinates` and `status` run parallel to `records`.
pub fn scan<'a>(
    records: &'a [Record],
    coordinates: &[i64],
    status: &[AnnotationStatus],
    c: &PhaseSetFillConfig,
) -> DonorColumns<'a> {
    assert_eq!(records.len(), coordinates.len());
    assert_eq!(records.len(), status.len());
    let layout = &c.layout;
    let rows = || {
        records
            .iter()
            .zip(coordinates.iter())
            .zip(status.iter())
            .map(move |((record, &pos), &st)| {
                let value = trailing_value(record.data(layout), c.separator);
                (pos, st, value)
            })
    };
    let (previous, mut next) = rayon::join(|| sweep(rows()), || sweep(rows().rev()));
    next.reverse();
    let out_of_order = coordinates.windows(2).filter(|w| w[1] < w[0]).count();
    if out_of_order > 0 {
        debug!("SCAN\tOutOfOrder\t{}", out_of_order);
    }
    DonorColumns { previous, next }
}
