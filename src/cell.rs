use std::fmt;

/// A position on the Grid, addressed by `row` (top to bottom) and `col` (left to right).
///
/// Cells are plain values: two Cells are equal if and only if both coordinates match.
///
/// ## Examples
/// ```
/// # use maze_search::Cell;
/// let cell = Cell::new(2, 5);
///
/// assert_eq!(cell, Cell::from((2, 5)));
/// assert_eq!(cell.to_string(), "(2, 5)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// the row, counted from the top
    pub row: usize,
    /// the column, counted from the left
    pub col: usize,
}

impl Cell {
    /// Creates a new Cell at (`row`, `col`)
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell { row, col }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> (usize, usize) {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.row, self.col)
    }
}
