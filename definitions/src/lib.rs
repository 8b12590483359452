//! Definitions -- A tiny data model for the phase-set filling problem.
//! A variant table is loaded once into a [Table](Table), mutated in place by the `phase_fill` crate, and written back by the CLI.
//! Nothing but the serialised row shape lives here; per-row scratch values are kept by the algorithm itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub input_file: String,
    /// Leading comment lines (e.g., `##fileformat=VCFv4.2`, `#CHROM ...`). Written back verbatim.
    pub meta_lines: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(input_file: &str, meta_lines: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            input_file: input_file.to_string(),
            meta_lines,
            records,
        }
    }
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            input_file: String::new(),
            meta_lines: vec![],
            records,
        }
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A row of the table. The width is fixed by the input and never changes;
/// only the contents of the schema and the data fields may grow.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }
    pub fn width(&self) -> usize {
        self.fields.len()
    }
    /// Raw (unparsed) coordinate. Panics if the layout does not fit this record;
    /// callers validate the layout beforehand.
    pub fn coordinate_str(&self, layout: &FieldLayout) -> &str {
        &self.fields[layout.coordinate]
    }
    pub fn schema(&self, layout: &FieldLayout) -> &str {
        &self.fields[layout.schema]
    }
    pub fn data(&self, layout: &FieldLayout) -> &str {
        &self.fields[layout.data]
    }
    pub fn schema_mut(&mut self, layout: &FieldLayout) -> &mut String {
        &mut self.fields[layout.schema]
    }
    pub fn data_mut(&mut self, layout: &FieldLayout) -> &mut String {
        &mut self.fields[layout.data]
    }
    pub fn join(&self, separator: char) -> String {
        let mut line = String::with_capacity(self.fields.iter().map(|f| f.len() + 1).sum());
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                line.push(separator);
            }
            line.push_str(field);
        }
        line
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.join('\t'))
    }
}

impl<S: Into<String>> From<Vec<S>> for Record {
    fn from(fields: Vec<S>) -> Self {
        Self::new(fields.into_iter().map(|x| x.into()).collect())
    }
}

/// Positions of the fields the algorithm reads or writes.
/// 0-indexed. The defaults are POS, FORMAT, and the first SAMPLE column of a VCF body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FieldLayout {
    pub coordinate: usize,
    pub schema: usize,
    pub data: usize,
}

impl FieldLayout {
    pub fn new(coordinate: usize, schema: usize, data: usize) -> Self {
        Self {
            coordinate,
            schema,
            data,
        }
    }
    /// Smallest record width this layout can address.
    pub fn min_width(&self) -> usize {
        self.coordinate.max(self.schema).max(self.data) + 1
    }
}

impl std::default::Default for FieldLayout {
    fn default() -> Self {
        Self {
            coordinate: 1,
            schema: 8,
            data: 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn accessors() {
        let record: Record = vec!["chr1", "100", "GT:PS", "0|1:100"].into();
        let layout = FieldLayout::new(1, 2, 3);
        assert_eq!(record.coordinate_str(&layout), "100");
        assert_eq!(record.schema(&layout), "GT:PS");
        assert_eq!(record.data(&layout), "0|1:100");
        assert_eq!(layout.min_width(), 4);
        assert_eq!(FieldLayout::default().min_width(), 10);
    }
    #[test]
    fn mutate_and_join() {
        let mut record: Record = vec!["chr1", "100", "GT", "0|1"].into();
        let layout = FieldLayout::new(1, 2, 3);
        record.schema_mut(&layout).push_str(":PS");
        record.data_mut(&layout).push_str(":100");
        assert_eq!(record.join(','), "chr1,100,GT:PS,0|1:100");
        assert_eq!(format!("{}", record), "chr1\t100\tGT:PS\t0|1:100");
        assert_eq!(record.width(), 4);
    }
}
