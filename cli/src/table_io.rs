//! Reading and writing delimited variant tables.
//!
//! No header row. Leading comment lines are kept aside and written back untouched.
use crate::error::CliError;
use definitions::{Record, Table};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Tried in this order when no separator is given.
pub const CANDIDATE_SEPARATORS: [char; 5] = ['\t', ',', ';', '|', ' '];
const SNIFF_LINES: usize = 16;

/// Parse a user-given separator. Accepts a single character, an escaped tab (`\t`), or `tab`.
pub fn parse_separator(arg: &str) -> Result<char, CliError> {
    let arg = match arg {
        "\\t" | "tab" | "TAB" => return Ok('\t'),
        _ => arg.strip_prefix('\\').unwrap_or(arg),
    };
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CliError::InvalidSeparator(arg.to_string())),
    }
}

/// The first candidate that appears the same, non-zero number of times on every line.
/// Falls back to tab.
pub fn sniff_separator(lines: &[&str]) -> char {
    CANDIDATE_SEPARATORS
        .iter()
        .copied()
        .find(|&sep| {
            let mut counts = lines.iter().map(|l| l.matches(sep).count());
            match counts.next() {
                Some(first) => first > 0 && counts.all(|c| c == first),
                None => false,
            }
        })
        .unwrap_or('\t')
}

fn is_meta(line: &str, comment_prefix: &str) -> bool {
    !comment_prefix.is_empty() && line.starts_with(comment_prefix)
}

/// Load a table. Returns the table and the separator actually used.
pub fn read_table<R: BufRead>(
    reader: R,
    input_file: &str,
    separator: Option<char>,
    comment_prefix: &str,
) -> Result<(Table, char), CliError> {
    let mut meta_lines = vec![];
    let mut lines = vec![];
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        if lines.is_empty() && is_meta(line, comment_prefix) {
            meta_lines.push(line.to_string());
        } else {
            lines.push(line.to_string());
        }
    }
    let separator = match separator {
        Some(sep) => sep,
        None => {
            let head: Vec<&str> = lines.iter().take(SNIFF_LINES).map(|x| x.as_str()).collect();
            let sep = sniff_separator(&head);
            debug!("READ\tSniffed\t{:?}", sep);
            sep
        }
    };
    let records: Vec<Record> = lines
        .iter()
        .map(|line| Record::new(line.split(separator).map(|x| x.to_string()).collect()))
        .collect();
    debug!("READ\tMetaLines\t{}", meta_lines.len());
    debug!("READ\tRecords\t{}", records.len());
    Ok((Table::new(input_file, meta_lines, records), separator))
}

pub fn write_table<W: Write>(wtr: &mut W, table: &Table, separator: char) -> std::io::Result<()> {
    for line in table.meta_lines.iter() {
        writeln!(wtr, "{}", line)?;
    }
    for record in table.records.iter() {
        writeln!(wtr, "{}", record.join(separator))?;
    }
    wtr.flush()
}

/// `result_name` as a path; if it has no extension, the input's extension is used.
pub fn output_path(input: &Path, result_name: &str) -> PathBuf {
    let output = PathBuf::from(result_name);
    match (output.extension(), input.extension()) {
        (None, Some(ext)) => output.with_extension(ext),
        _ => output,
    }
}
