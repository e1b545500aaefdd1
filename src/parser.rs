use crate::error::ParseError;
use crate::models::{RawRow, TagEntry};
use lazy_static::lazy_static;
use log::{debug, trace};
use rayon::prelude::*;
use regex::Regex;

lazy_static! {
    // Optional sign, ASCII digit groups joined by single underscores, surrounding whitespace.
    static ref COUNT_REGEX: Regex = Regex::new(r"^\s*([+-]?[0-9]+(?:_[0-9]+)*)\s*$").unwrap();
}

/// Splits the raw table into data rows.
///
/// The first line is the header and is always dropped, whatever it contains.
/// Lines that are empty once their terminator is removed are dropped too. Every
/// other line is split on `,` without any quoting rules, so a tag containing a
/// comma ends up spread over several fields.
pub fn split_rows(s: &str) -> Vec<RawRow> {
    let rows: Vec<RawRow> = s
        .split('\n')
        .enumerate()
        .skip(1)
        .filter_map(|(idx, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                trace!("Skipping empty line {}", idx + 1);
                return None;
            }
            Some(RawRow {
                line: idx + 1,
                fields: line.split(',').map(str::to_string).collect(),
            })
        })
        .collect();

    debug!("Split tag table into {} data rows", rows.len());
    rows
}

/// Converts the count column of the row on `line` into an integer.
///
/// Surrounding whitespace, a leading sign and `_` between digit groups are
/// accepted. Digits must be ASCII: full-width or other non-ASCII decimal
/// digits (`３`) are rejected as `InvalidCount`, although some producers
/// would read them as numbers.
pub fn parse_count(value: &str, line: usize) -> Result<i128, ParseError> {
    let caps = COUNT_REGEX
        .captures(value)
        .ok_or_else(|| ParseError::InvalidCount {
            line,
            value: value.to_string(),
        })?;
    let digits = caps[1].replace('_', "");
    digits
        .parse()
        .map_err(|source| ParseError::CountOutOfRange {
            line,
            value: value.to_string(),
            source,
        })
}

/// Parses a single row. `Ok(None)` means the row has an empty tag and is
/// ignored.
fn parse_row(row: &RawRow) -> Result<Option<TagEntry>, ParseError> {
    let tag = match row.fields.first() {
        Some(tag) if !tag.is_empty() => tag,
        _ => {
            trace!("Skipping line {} with an empty tag", row.line);
            return Ok(None);
        }
    };
    let count = row
        .fields
        .get(1)
        .ok_or(ParseError::MissingCount { line: row.line })?;
    Ok(Some(TagEntry::new(tag.as_str(), parse_count(count, row.line)?)))
}

/// Turns data rows into tag entries, keeping their order.
///
/// Fails on the first malformed row (in input order); no partial result is
/// returned.
pub fn parse_rows(rows: &[RawRow]) -> Result<Vec<TagEntry>, ParseError> {
    let parsed: Vec<Result<Option<TagEntry>, ParseError>> =
        rows.par_iter().map(parse_row).collect();

    let mut entries = Vec::with_capacity(parsed.len());
    for result in parsed {
        if let Some(entry) = result? {
            entries.push(entry);
        }
    }

    debug!(
        "Parsed {} tag entries ({} rows skipped)",
        entries.len(),
        rows.len() - entries.len()
    );
    Ok(entries)
}
