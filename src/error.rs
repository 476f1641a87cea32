use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for CSV table operations
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while loading or querying a CSV table
#[derive(Error, Debug)]
pub enum CsvError {
    /// The source file is missing or could not be read
    #[error("{}", describe_io(.path, .source))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not valid UTF-8 text
    #[error("CSV file [{}] is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },

    /// Delimiter that cannot separate cells
    #[error("Invalid cell delimiter: {0:?}")]
    InvalidDelimiter(char),

    /// Input ended inside a quoted cell (strict mode only)
    #[error("Quoted cell opened on line {line} is never closed")]
    UnterminatedQuote { line: usize },

    /// Negative index given to a row or field accessor
    #[error("Index value [{index}] should not be negative")]
    NegativeIndex { index: isize },

    /// Row index at or beyond the number of rows
    #[error("Row index out of bounds: {index} (rows: {len})")]
    RowIndexOutOfBounds { index: usize, len: usize },

    /// Resolved column index beyond the cells of a particular row
    #[error("Column index [{column}] exceeds size [{len}] of row {row}")]
    ColumnIndexOutOfBounds { column: usize, row: usize, len: usize },

    /// Row index at or beyond the cells of a column
    #[error("Index [{index}] is out of bounds for header [{header}] with {len} cells")]
    FieldIndexOutOfBounds {
        header: String,
        index: usize,
        len: usize,
    },
}

impl CsvError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        CsvError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn describe_io(path: &Path, source: &std::io::Error) -> String {
    if source.kind() == std::io::ErrorKind::NotFound {
        format!("CSV file [{}] was not found", path.display())
    } else {
        format!("Failed to read CSV file [{}]: {}", path.display(), source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CsvError::io(
            Path::new("/missing/data.csv"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert_eq!(err.to_string(), "CSV file [/missing/data.csv] was not found");
    }

    #[test]
    fn test_other_io_message_keeps_path() {
        let err = CsvError::io(
            Path::new("data.csv"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("[data.csv]"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_negative_index_message() {
        let err = CsvError::NegativeIndex { index: -3 };
        assert_eq!(err.to_string(), "Index value [-3] should not be negative");
    }
}
