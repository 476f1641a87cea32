use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{CsvError, Result};
use crate::parser::Row;

/// An in-memory CSV table: the parsed rows plus the optional header row
///
/// The table is built once by the loading functions in [`crate::io`] and never
/// changes afterwards. Rows are not required to have the same width, so every
/// column lookup checks the length of the row it reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// Data rows, header row excluded
    rows: Vec<Row>,
    /// Header names in file order, duplicates kept
    headers: Vec<String>,
    /// First column index of every distinct header name
    header_index: IndexMap<String, usize>,
    delimiter: char,
    has_headers: bool,
    /// File the table was loaded from, if any
    path: Option<PathBuf>,
}

impl CsvTable {
    /// Build a table from parsed rows
    ///
    /// With `has_headers`, the first row (if any) is taken out and used as the
    /// header row
    pub(crate) fn new(
        mut rows: Vec<Row>,
        delimiter: char,
        has_headers: bool,
        path: Option<PathBuf>,
    ) -> Self {
        let headers = if has_headers && !rows.is_empty() {
            rows.remove(0)
        } else {
            Vec::new()
        };

        let mut header_index = IndexMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            header_index.entry(name.clone()).or_insert(i);
        }

        Self {
            rows,
            headers,
            header_index,
            delimiter,
            has_headers,
            path,
        }
    }

    /// Get the number of data rows (header row not included)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.row_count() < 1
    }

    /// Get the header names, empty when the table was read without headers
    pub fn header_names(&self) -> &[String] {
        &self.headers
    }

    /// Whether the first row of the source was used as the header row
    pub fn has_headers(&self) -> bool {
        self.has_headers
    }

    /// Get the delimiter the table was parsed with
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Get the file the table was loaded from
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the column index of a header. A repeated header name resolves to its
    /// first occurrence
    ///
    /// # Returns
    /// The 0-based column index, or `None` if no header has this name
    pub fn column_index(&self, header_name: &str) -> Option<usize> {
        self.header_index.get(header_name).copied()
    }

    /// Find the first row whose cell under `header_name` equals `value`
    ///
    /// # Errors
    /// - `CsvError::ColumnIndexOutOfBounds` if a row checked before a match is too short
    ///   to hold the column
    ///
    /// # Returns
    /// The row index, or `None` if the header does not exist or no row matches
    pub fn row_index(&self, header_name: &str, value: &str) -> Result<Option<usize>> {
        let Some(column) = self.column_index(header_name) else {
            return Ok(None);
        };

        for (i, row) in self.rows.iter().enumerate() {
            if cell_at(row, i, column)? == value {
                return Ok(Some(i));
            }
        }

        Ok(None)
    }

    /// Get every cell under `header_name`, in row order
    ///
    /// # Errors
    /// - `CsvError::ColumnIndexOutOfBounds` if some row is too short to hold the column
    ///
    /// # Returns
    /// The column cells, or `None` if the header does not exist
    pub fn column(&self, header_name: &str) -> Result<Option<Vec<&str>>> {
        let Some(column) = self.column_index(header_name) else {
            return Ok(None);
        };

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| cell_at(row, i, column))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Get the cell under `header_name` in row `row_index`
    ///
    /// # Errors
    /// - `CsvError::NegativeIndex` if `row_index` is negative
    /// - `CsvError::ColumnIndexOutOfBounds` if some row is too short to hold the column
    /// - `CsvError::FieldIndexOutOfBounds` if `row_index` is past the end of the column
    ///
    /// # Returns
    /// The cell value, or `None` if the header does not exist
    pub fn field_value(&self, header_name: &str, row_index: isize) -> Result<Option<&str>> {
        let index = non_negative(row_index)?;

        let Some(cells) = self.column(header_name)? else {
            return Ok(None);
        };

        if index >= cells.len() {
            return Err(CsvError::FieldIndexOutOfBounds {
                header: header_name.to_string(),
                index,
                len: cells.len(),
            });
        }

        Ok(Some(cells[index]))
    }

    /// Get a slice of all data rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a data row by index. Index 0 is the first row after the header row
    ///
    /// # Errors
    /// - `CsvError::NegativeIndex` if `index` is negative
    /// - `CsvError::RowIndexOutOfBounds` if `index` is past the last row
    pub fn row(&self, index: isize) -> Result<&[String]> {
        let index = non_negative(index)?;

        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(CsvError::RowIndexOutOfBounds {
                index,
                len: self.rows.len(),
            })
    }

    /// Iterate over data rows
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

fn non_negative(index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| CsvError::NegativeIndex { index })
}

fn cell_at(row: &Row, row_index: usize, column: usize) -> Result<&str> {
    row.get(column)
        .map(String::as_str)
        .ok_or(CsvError::ColumnIndexOutOfBounds {
            column,
            row: row_index,
            len: row.len(),
        })
}

impl IntoIterator for CsvTable {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CsvTable {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
