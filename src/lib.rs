//! A library to tally league tables from match results.
//!
//! Results are read as `home;away;outcome` records, where the outcome is the home team's `win`,
//! `draw`, or `loss`:
//!
//! ```
//! let input = "\
//! Allegoric Alaskans;Blithering Badgers;win
//! Devastating Donkeys;Allegoric Alaskans;draw
//! ";
//! let matches = tally::parse_matches(input.as_bytes()).unwrap();
//! let table = tally::tally(&matches);
//! let leader = &table.rows()[0];
//! assert_eq!("Allegoric Alaskans", leader.team());
//! assert_eq!(4, leader.points());
//! ```

extern crate csv;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod game;
mod outcome;
pub mod render;
mod table;

pub use game::{parse_matches, parse_matches_strict, read_matches, Match};
pub use outcome::{Outcome, UnknownOutcome};
pub use table::{tally, InvalidOrder, Order, Table, TableRow};

/// Crate-specific errors.
#[derive(Debug, Fail)]
pub enum Error {
    /// This record did not have exactly three fields.
    #[fail(
        display = "malformed record on line {}: expected 3 fields, found {}: {}",
        line, fields, record
    )]
    MalformedRecord {
        /// The line the record starts on.
        line: u64,
        /// The number of fields found.
        fields: usize,
        /// The record's fields, joined with semicolons.
        record: String,
    },

    /// This outcome token is not `win`, `draw`, or `loss`.
    ///
    /// Only returned by strict parsing.
    #[fail(display = "unknown outcome on line {}: {}", line, token)]
    UnknownOutcome {
        /// The line the record starts on.
        line: u64,
        /// The outcome token as read.
        token: String,
    },

    /// The input could not be read as delimited records.
    #[fail(display = "{}", _0)]
    Csv(#[cause] csv::Error),

    /// Input or output failed.
    #[fail(display = "{}", _0)]
    Io(#[cause] std::io::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_message() {
        let err = parse_matches("A;B\n".as_bytes()).unwrap_err();
        assert_eq!(
            "malformed record on line 1: expected 3 fields, found 2: A;B",
            err.to_string()
        );
    }

    #[test]
    fn missing_file() {
        match read_matches("tests/data/does-not-exist.txt", false).unwrap_err() {
            Error::Io(_) => {}
            err => panic!("unexpected error: {}", err),
        }
    }
}
