use std::fmt;

use crate::error::{CsvError, Result};
use crate::quote::QUOTE;

/// Common cell delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    /// `,` - the default
    #[default]
    Comma,
    /// `;` - common in locales using a decimal comma
    Semicolon,
    /// `\t`
    Tab,
    /// `|`
    Pipe,
}

impl Delimiter {
    /// The character cells are split on
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }
}

impl From<Delimiter> for char {
    fn from(delimiter: Delimiter) -> Self {
        delimiter.as_char()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Comma => "comma",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Tab => "tab",
            Delimiter::Pipe => "pipe",
        };
        f.write_str(name)
    }
}

/// Options for reading CSV files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Character separating cells on a line
    pub delimiter: char,
    /// Whether the first parsed row holds the column names
    pub has_headers: bool,
    /// Fail instead of dropping the last row when the input ends inside a quoted cell
    pub strict_quotes: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Comma.as_char(),
            has_headers: true,
            strict_quotes: false,
        }
    }
}

impl CsvOptions {
    /// Options for files without a header row
    pub fn headerless() -> Self {
        Self {
            has_headers: false,
            ..Self::default()
        }
    }

    /// Set the cell delimiter
    ///
    /// Accepts either a [`Delimiter`] or any `char`
    pub fn with_delimiter(mut self, delimiter: impl Into<char>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set whether the first row is a header row
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set whether an unterminated quoted cell is an error
    pub fn with_strict_quotes(mut self, strict: bool) -> Self {
        self.strict_quotes = strict;
        self
    }

    /// Check that the delimiter can separate cells
    ///
    /// # Errors
    /// - `CsvError::InvalidDelimiter` if the delimiter is the quote character or a line break
    pub fn validate(&self) -> Result<()> {
        match self.delimiter {
            QUOTE | '\n' | '\r' => Err(CsvError::InvalidDelimiter(self.delimiter)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CsvOptions::default();
        assert_eq!(options.delimiter, ',');
        assert!(options.has_headers);
        assert!(!options.strict_quotes);
        assert!(!CsvOptions::headerless().has_headers);
    }

    #[test]
    fn test_builder() {
        let options = CsvOptions::default()
            .with_delimiter(Delimiter::Semicolon)
            .with_headers(false)
            .with_strict_quotes(true);
        assert_eq!(options.delimiter, ';');
        assert!(!options.has_headers);
        assert!(options.strict_quotes);

        assert_eq!(CsvOptions::default().with_delimiter('#').delimiter, '#');
    }

    #[test]
    fn test_validate() {
        assert!(CsvOptions::default().validate().is_ok());
        assert!(CsvOptions::default().with_delimiter(Delimiter::Tab).validate().is_ok());

        for bad in ['"', '\n', '\r'] {
            let err = CsvOptions::default().with_delimiter(bad).validate().unwrap_err();
            assert!(matches!(err, CsvError::InvalidDelimiter(c) if c == bad));
        }
    }

    #[test]
    fn test_delimiter_display() {
        assert_eq!(Delimiter::Tab.to_string(), "tab");
        assert_eq!(Delimiter::Semicolon.to_string(), "semicolon");
        assert_eq!(char::from(Delimiter::Pipe), '|');
    }
}
