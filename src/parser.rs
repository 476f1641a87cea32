//! Row assembly from physical lines
//!
//! Each line is first split on the delimiter without looking at quotes. The
//! [`RowAssembler`] then glues pre-cells back together while a quoted cell is
//! open, reinserting the delimiter between pre-cells of the same line and a
//! newline between lines

use crate::quote::{QUOTE, odd_quotes_from_end, odd_quotes_from_start, unquote};

/// A parsed row: one string per cell, widths may differ between rows
pub type Row = Vec<String>;

/// Split one physical line on every occurrence of `delimiter`
///
/// Empty pre-cells are kept, including a trailing one. An empty line yields a
/// single empty pre-cell
pub fn split_line(line: &str, delimiter: char) -> impl Iterator<Item = &str> {
    line.split(delimiter)
}

/// Whether the assembler is inside a quoted cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    #[default]
    Unquoted,
    InQuotedCell,
}

/// Output of a finished [`RowAssembler`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    /// Completed rows in input order
    pub rows: Vec<Row>,
    /// Line (1-based) on which a quoted cell opened and never closed.
    /// The row it belongs to is not part of `rows`
    pub unterminated: Option<usize>,
}

/// State machine turning physical lines into logical rows
#[derive(Debug)]
pub struct RowAssembler {
    delimiter: char,
    state: QuoteState,
    /// Quoted cell content collected so far, wrapping quotes included
    accumulator: String,
    current: Row,
    rows: Vec<Row>,
    /// Number of lines pushed so far
    line: usize,
    opened_at: usize,
}

impl RowAssembler {
    /// Create an assembler splitting cells on `delimiter`
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            state: QuoteState::Unquoted,
            accumulator: String::new(),
            current: Row::new(),
            rows: Vec::new(),
            line: 0,
            opened_at: 0,
        }
    }

    /// Current quoting state
    pub fn state(&self) -> QuoteState {
        self.state
    }

    /// Rows completed so far
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Feed one physical line, without its terminator
    pub fn push_line(&mut self, line: &str) {
        self.line += 1;

        for (index, pre_cell) in split_line(line, self.delimiter).enumerate() {
            match self.state {
                QuoteState::Unquoted => self.push_unquoted(pre_cell),
                QuoteState::InQuotedCell => self.push_quoted(index, pre_cell),
            }
        }

        if self.state == QuoteState::Unquoted {
            let row = std::mem::take(&mut self.current);
            self.rows.push(row);
        }
    }

    /// End the input and hand over the completed rows
    pub fn finish(self) -> Assembled {
        let unterminated = match self.state {
            QuoteState::Unquoted => None,
            QuoteState::InQuotedCell => Some(self.opened_at),
        };

        Assembled {
            rows: self.rows,
            unterminated,
        }
    }

    fn push_unquoted(&mut self, pre_cell: &str) {
        if !pre_cell.starts_with(QUOTE) {
            // Covers the empty pre-cell too
            self.current.push(pre_cell.to_string());
            return;
        }

        let self_contained = !odd_quotes_from_start(pre_cell)
            || (odd_quotes_from_end(pre_cell) && pre_cell.len() > 1);

        if self_contained {
            self.current.push(unquote(pre_cell));
        } else {
            self.state = QuoteState::InQuotedCell;
            self.opened_at = self.line;
            self.accumulator = pre_cell.to_string();
        }
    }

    fn push_quoted(&mut self, index: usize, pre_cell: &str) {
        if index == 0 {
            self.accumulator.push('\n');
        } else {
            self.accumulator.push(self.delimiter);
        }
        self.accumulator.push_str(pre_cell);

        if odd_quotes_from_end(pre_cell) {
            self.state = QuoteState::Unquoted;
            let cell = unquote(&self.accumulator);
            self.accumulator.clear();
            self.current.push(cell);
        }
    }
}

/// Run a fresh assembler over `lines`
pub fn parse_lines<'a, I>(lines: I, delimiter: char) -> Assembled
where
    I: IntoIterator<Item = &'a str>,
{
    let mut assembler = RowAssembler::new(delimiter);
    for line in lines {
        assembler.push_line(line);
    }
    assembler.finish()
}
