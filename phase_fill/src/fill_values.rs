use crate::annotation::AnnotationStatus;
use crate::config::PhaseSetFillConfig;
use crate::neighbor_scan::{Donor, DonorColumns};
use definitions::Record;
use rayon::prelude::*;

/// The donor closer to `own`. On a tie, `previous` wins.
/// A missing side never wins over an existing one; with no donor at all, the sentinel is returned.
pub fn choose_donor<'a>(
    own: i64,
    previous: Option<&Donor<'a>>,
    next: Option<&Donor<'a>>,
) -> Donor<'a> {
    let dist = |d: &&Donor<'a>| d.coordinate.abs_diff(own);
    // min_by_key keeps the first of equal elements.
    previous
        .into_iter()
        .chain(next)
        .min_by_key(dist)
        .copied()
        .unwrap_or_else(Donor::sentinel)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillCount {
    pub filled: usize,
    pub from_sentinel: usize,
}

/// A value to append to one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub value: String,
    pub from_sentinel: bool,
}

/// One entry per row; `None` for rows that keep their data field.
pub fn select_values(
    coordinates: &[i64],
    status: &[AnnotationStatus],
    columns: &DonorColumns,
) -> Vec<Option<Fill>> {
    assert_eq!(coordinates.len(), status.len());
    assert_eq!(coordinates.len(), columns.len());
    coordinates
        .par_iter()
        .zip(status.par_iter())
        .zip(columns.previous.par_iter().zip(columns.next.par_iter()))
        .map(|((&own, st), (prev, next))| match st.is_annotated() {
            true => None,
            false => {
                let from_sentinel = prev.is_none() && next.is_none();
                let donor = choose_donor(own, prev.as_ref(), next.as_ref());
                let value = donor.value.to_string();
                Some(Fill {
                    value,
                    from_sentinel,
                })
            }
        })
        .collect()
}

/// Append `separator + value` to the data field of each selected row.
pub fn write_values(
    records: &mut [Record],
    fills: Vec<Option<Fill>>,
    c: &PhaseSetFillConfig,
) -> FillCount {
    assert_eq!(records.len(), fills.len());
    let layout = &c.layout;
    records
        .par_iter_mut()
        .zip(fills.into_par_iter())
        .filter_map(|(record, fill)| fill.map(|f| (record, f)))
        .map(|(record, fill)| {
            let data = record.data_mut(layout);
            data.push(c.separator);
            data.push_str(&fill.value);
            FillCount {
                filled: 1,
                from_sentinel: fill.from_sentinel as usize,
            }
        })
        .reduce(FillCount::default, |x, y| FillCount {
            filled: x.filled + y.filled,
            from_sentinel: x.from_sentinel + y.from_sentinel,
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use definitions::FieldLayout;
    use AnnotationStatus::*;
    #[test]
    fn nearest_with_tie() {
        let a = Donor::new(10, "A");
        let b = Donor::new(50, "B");
        // 20 vs 20.
        assert_eq!(choose_donor(30, Some(&a), Some(&b)).value, "A");
        // 30 vs 10.
        assert_eq!(choose_donor(40, Some(&a), Some(&b)).value, "B");
        assert_eq!(choose_donor(11, Some(&a), Some(&b)).value, "A");
    }
    #[test]
    fn one_sided() {
        let a = Donor::new(20, "A");
        assert_eq!(choose_donor(5, None, Some(&a)), a);
        assert_eq!(choose_donor(1_000, Some(&a), None), a);
        assert_eq!(choose_donor(5, None, None), Donor::sentinel());
    }
    #[test]
    fn negative_coordinates() {
        let a = Donor::new(-10, "A");
        let b = Donor::new(10, "B");
        // 9 vs 11.
        assert_eq!(choose_donor(-1, Some(&a), Some(&b)).value, "A");
        assert_eq!(choose_donor(1, Some(&a), Some(&b)).value, "B");
        assert_eq!(choose_donor(0, Some(&a), Some(&b)).value, "A");
    }
    #[test]
    fn extreme_coordinates() {
        let low = Donor::new(i64::MIN, "L");
        let high = Donor::new(i64::MAX, "H");
        assert_eq!(choose_donor(i64::MAX, Some(&low), None).value, "L");
        assert_eq!(choose_donor(i64::MIN, None, Some(&high)).value, "H");
        assert_eq!(choose_donor(i64::MAX - 1, Some(&low), Some(&high)).value, "H");
        assert_eq!(choose_donor(-1, Some(&low), Some(&high)).value, "L");
        // Equal distance u64::MAX / 2 on both sides.
        assert_eq!(choose_donor(0, Some(&Donor::new(-i64::MAX, "L")), Some(&high)).value, "L");
    }
    #[test]
    fn select_and_write() {
        let mut records: Vec<Record> = vec![
            vec!["5", "a:b"].into(),
            vec!["20", "a:b:c:d:e:f:g:99"].into(),
            vec!["35", "x:y"].into(),
        ];
        let coordinates = vec![5, 20, 35];
        let status = vec![Missing, Annotated, Missing];
        let d = Some(Donor::new(20, "99"));
        let columns = DonorColumns {
            previous: vec![None, d, d],
            next: vec![d, d, None],
        };
        let fills = select_values(&coordinates, &status, &columns);
        assert_eq!(fills[1], None);
        let config = PhaseSetFillConfig::default().with_layout(FieldLayout::new(0, 2, 1));
        let count = write_values(&mut records, fills, &config);
        assert_eq!(
            count,
            FillCount {
                filled: 2,
                from_sentinel: 0
            }
        );
        assert_eq!(records[0].fields[1], "a:b:99");
        assert_eq!(records[1].fields[1], "a:b:c:d:e:f:g:99");
        assert_eq!(records[2].fields[1], "x:y:99");
    }
    #[test]
    fn sentinel_counted() {
        let mut records: Vec<Record> = vec![vec!["5", "a"].into()];
        let columns = DonorColumns {
            previous: vec![None],
            next: vec![None],
        };
        let fills = select_values(&[5], &[Missing], &columns);
        let config = PhaseSetFillConfig::default().with_layout(FieldLayout::new(0, 2, 1));
        let count = write_values(&mut records, fills, &config);
        assert_eq!(count.from_sentinel, 1);
        assert_eq!(records[0].fields[1], "a:0");
    }
}
