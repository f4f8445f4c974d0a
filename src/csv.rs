//! Quote-aware CSV field access over raw text.
//!
//! # Invariants
//! - No table is materialized: the header line, the target row, and the
//!   target column are located independently on the raw text.
//! - Column names are matched only within the header line; row content is
//!   never reinterpreted as column names.
//! - A `,` inside an open double quote is not a field boundary. Tokens
//!   are edge-trimmed of spaces, tabs, quote characters, and trailing
//!   `\r`; interior quotes pass through verbatim. Doubled-quote escapes
//!   are NOT decoded (known limitation, kept for fidelity with the data
//!   producer).
//! - Tokenization never mutates or copies the input; fields are borrowed
//!   slices.

use core::fmt;

use memchr::{memchr, memrchr};

/// Header field ceiling.
pub const MAX_COLUMNS: usize = 256;

/// Which data row to read (rows count from 0, after the header).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowSelector {
    Absolute(usize),
    Last,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsvError {
    /// Header declares more than `MAX_COLUMNS` fields.
    TooManyColumns,
    /// Column absent from the header, or the target row is too ragged to
    /// reach the column index.
    ColumnNotFound,
    /// The text ends before the requested row.
    RowNotFound,
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::TooManyColumns => write!(f, "too many columns in header"),
            CsvError::ColumnNotFound => write!(f, "column not found"),
            CsvError::RowNotFound => write!(f, "row not found"),
        }
    }
}

impl std::error::Error for CsvError {}

/// Read one field from delimited text.
///
/// The header line runs to the first newline (or the whole text). The
/// returned value is the trimmed field slice; no type coercion is done.
/// Ragged rows shorter than the target column index are
/// `CsvError::ColumnNotFound`, the same recoverable kind as a missing
/// header column.
pub fn get_field<'a>(
    text: &'a str,
    row: RowSelector,
    column: &str,
) -> Result<&'a str, CsvError> {
    let bytes = text.as_bytes();
    let header_end = memchr(b'\n', bytes).unwrap_or(bytes.len());

    let target = column_index(&text[..header_end], column)?;

    if header_end == bytes.len() {
        // Header-only text has no data section.
        return Err(CsvError::RowNotFound);
    }
    let data_start = header_end + 1;

    let row_start = match row {
        RowSelector::Absolute(n) => {
            let mut pos = data_start;
            for _ in 0..n {
                match memchr(b'\n', &bytes[pos..]) {
                    Some(i) => pos += i + 1,
                    None => return Err(CsvError::RowNotFound),
                }
            }
            pos
        }
        RowSelector::Last => {
            // A trailing line without a terminating newline counts as the
            // last row; with one, the segment before it does.
            let effective_end = if bytes.ends_with(b"\n") {
                bytes.len() - 1
            } else {
                bytes.len()
            };
            if effective_end <= data_start {
                data_start
            } else {
                match memrchr(b'\n', &bytes[data_start..effective_end]) {
                    Some(i) => data_start + i + 1,
                    None => data_start,
                }
            }
        }
    };

    let row_end = row_start + memchr(b'\n', &bytes[row_start..]).unwrap_or(bytes.len() - row_start);
    let row_text = &text[row_start..row_end];

    // Short-circuit: tokenize only up to the target column.
    for (idx, token) in FieldIter::new(row_text).enumerate() {
        if idx == target {
            return Ok(trim_field(token));
        }
    }
    Err(CsvError::ColumnNotFound)
}

/// Index of `column` within the header line (exact post-trim match).
///
/// The whole header is tokenized so the column ceiling is always
/// enforced, even when the match appears early.
fn column_index(header: &str, column: &str) -> Result<usize, CsvError> {
    let mut found = None;
    for (idx, token) in FieldIter::new(header).enumerate() {
        if idx >= MAX_COLUMNS {
            return Err(CsvError::TooManyColumns);
        }
        if found.is_none() && trim_field(token) == column {
            found = Some(idx);
        }
    }
    found.ok_or(CsvError::ColumnNotFound)
}

/// Splits a line at commas that are outside double quotes.
///
/// An empty line yields exactly one empty token.
struct FieldIter<'a> {
    rest: Option<&'a str>,
}

impl<'a> FieldIter<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: Some(line) }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let s = self.rest?;
        let bytes = s.as_bytes();
        let mut in_quotes = false;
        for (i, &b) in bytes.iter().enumerate() {
            if b == b'"' {
                in_quotes = !in_quotes;
            } else if b == b',' && !in_quotes {
                self.rest = Some(&s[i + 1..]);
                return Some(&s[..i]);
            }
        }
        self.rest = None;
        Some(s)
    }
}

/// Trim leading spaces/tabs/quotes and trailing spaces/tabs/quotes/CR.
fn trim_field(token: &str) -> &str {
    let bytes = token.as_bytes();
    let mut start = 0;
    while start < bytes.len() && matches!(bytes[start], b' ' | b'\t' | b'"') {
        start += 1;
    }
    let mut end = bytes.len();
    while end > start && matches!(bytes[end - 1], b' ' | b'\t' | b'"' | b'\r') {
        end -= 1;
    }
    &token[start..end]
}
