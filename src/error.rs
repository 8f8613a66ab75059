//! Error types for building a Grid and for rejecting invalid search requests.
//!
//! Not finding a Path is never an error: searches report it as `Ok(None)`.

use crate::Cell;
use std::fmt;

/// The reasons a [`Grid`](crate::Grid) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The Grid has no rows or no columns.
    Empty,
    /// A row has a different length than the first one.
    Ragged {
        /// index of the offending row
        row: usize,
        /// the length of the first row
        expected: usize,
        /// the length of the offending row
        found: usize,
    },
    /// A marker other than `0` (open) or `1` (blocked).
    InvalidMarker {
        /// row of the marker
        row: usize,
        /// column of the marker
        col: usize,
        /// the marker itself
        value: u8,
    },
    /// A token in a textual Grid is not a number.
    Parse {
        /// the (0-based) line of the token
        line: usize,
        /// the token that failed to parse
        token: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid has no cells"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            GridError::InvalidMarker { row, col, value } => write!(
                f,
                "invalid marker {} at ({}, {}), expected 0 or 1",
                value, row, col
            ),
            GridError::Parse { line, token } => {
                write!(f, "line {}: cannot parse {:?} as a marker", line, token)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The reasons a search request is rejected before it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal lies outside of the Grid.
    OutOfBounds {
        /// the offending Cell
        cell: Cell,
        /// number of columns of the Grid
        width: usize,
        /// number of rows of the Grid
        height: usize,
    },
    /// The start or goal is a blocked Cell.
    Blocked {
        /// the offending Cell
        cell: Cell,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::OutOfBounds {
                cell,
                width,
                height,
            } => write!(
                f,
                "cell {} is outside of the {}x{} grid",
                cell, height, width
            ),
            SearchError::Blocked { cell } => write!(f, "cell {} is blocked", cell),
        }
    }
}

impl std::error::Error for SearchError {}

/// Returned when a string names none of the known [`Strategy`](crate::Strategy) variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search strategy {:?}", self.0)
    }
}

impl std::error::Error for ParseStrategyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GridError::Ragged {
                row: 2,
                expected: 8,
                found: 7
            }
            .to_string(),
            "row 2 has 7 columns, expected 8"
        );
        assert_eq!(
            SearchError::OutOfBounds {
                cell: Cell::new(9, 0),
                width: 8,
                height: 8
            }
            .to_string(),
            "cell (9, 0) is outside of the 8x8 grid"
        );
        assert_eq!(
            SearchError::Blocked {
                cell: Cell::new(0, 2)
            }
            .to_string(),
            "cell (0, 2) is blocked"
        );
        assert_eq!(
            ParseStrategyError("dijkstra".into()).to_string(),
            "unknown search strategy \"dijkstra\""
        );
    }
}
