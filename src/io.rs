use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use encoding_rs::UTF_8;

use crate::error::{CsvError, Result};
use crate::options::CsvOptions;
use crate::parser::parse_lines;
use crate::table::CsvTable;

const BOM: char = '\u{feff}';

/// Read a CSV table from a file
///
/// The whole file is read and parsed before this returns. The file handle is
/// closed before the function returns, whether it succeeds or not
///
/// # Arguments
/// - `path` - The path to the CSV file to read
/// - `options` - Delimiter, header row and quote strictness
///
/// # Errors
/// - `CsvError::InvalidDelimiter` if the configured delimiter cannot separate cells
/// - `CsvError::Io` if the file is missing or unreadable
/// - `CsvError::Encoding` if the file is not UTF-8 text
/// - `CsvError::UnterminatedQuote` if the file ends inside a quoted cell and `strict_quotes` is set
///
/// # Returns
/// A `CsvTable` holding every row of the file
pub fn from_file<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<CsvTable> {
    let path = path.as_ref();
    options.validate()?;

    let data = std::fs::read(path).map_err(|e| CsvError::io(path, e))?;
    let text = decode_utf8(&data).ok_or_else(|| CsvError::Encoding {
        path: path.to_path_buf(),
    })?;

    build(&text, options, Some(path.to_path_buf()))
}

/// Read a CSV table from text already in memory
///
/// # Errors
/// Same as [`from_file`], minus the I/O and encoding errors
pub fn from_str(text: &str, options: &CsvOptions) -> Result<CsvTable> {
    options.validate()?;
    build(text.strip_prefix(BOM).unwrap_or(text), options, None)
}

/// Parse with the default options: comma delimiter, header row, lenient quotes
impl FromStr for CsvTable {
    type Err = CsvError;

    fn from_str(s: &str) -> Result<Self> {
        from_str(s, &CsvOptions::default())
    }
}

/// Decode UTF-8 bytes, dropping a leading BOM. `None` on malformed input
fn decode_utf8(data: &[u8]) -> Option<Cow<'_, str>> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(data);
    (!had_errors).then_some(text)
}

/// Split text into physical lines ending at `\n`, `\r` or `\r\n`
///
/// Terminators are not part of the lines. No empty line follows a final terminator
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let Some(end) = rest.find(['\n', '\r']) else {
            return Some(std::mem::take(&mut rest));
        };

        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

fn build(text: &str, options: &CsvOptions, path: Option<PathBuf>) -> Result<CsvTable> {
    let assembled = parse_lines(physical_lines(text), options.delimiter);

    if let Some(line) = assembled.unterminated {
        if options.strict_quotes {
            return Err(CsvError::UnterminatedQuote { line });
        }
        tracing::warn!(
            line,
            path = ?path,
            "Input ends inside a quoted cell, dropping its row"
        );
    }

    let table = CsvTable::new(
        assembled.rows,
        options.delimiter,
        options.has_headers,
        path,
    );

    tracing::debug!(
        path = ?table.path(),
        rows = table.row_count(),
        headers = table.header_names().len(),
        delimiter = ?table.delimiter(),
        "Loaded CSV table"
    );

    Ok(table)
}
