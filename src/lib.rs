//! # csv table
//!
//! A Rust library for loading delimited text files into an in-memory table
//! and looking cells up by header name and row index
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lib_csv_table::{from_file, CsvOptions, Delimiter};
//!
//! let options = CsvOptions::default().with_delimiter(Delimiter::Semicolon);
//! let table = from_file("scenarios.csv", &options).unwrap();
//!
//! println!("Rows: {}", table.row_count());
//! if let Some(row) = table.row_index("ZoneName", "RedBlueExGalaxy").unwrap() {
//!     println!("Scenario: {:?}", table.field_value("ScenarioNo", row as isize).unwrap());
//! }
//! ```
//!
//! ## Format
//!
//! - one row per line, cells separated by a single-character delimiter
//! - empty cells are kept, rows may have different widths
//! - a cell wrapped in double quotes may contain the delimiter and line breaks,
//!   and `""` inside it stands for one literal `"`
//! - the first row is the header row unless disabled

pub mod error;
pub mod io;
pub mod options;
pub mod parser;
pub mod quote;
pub mod table;

pub use crate::error::{CsvError, Result};
pub use crate::io::{from_file, from_str};
pub use crate::options::{CsvOptions, Delimiter};
pub use crate::parser::{Assembled, QuoteState, Row, RowAssembler, parse_lines, split_line};
pub use crate::table::CsvTable;
