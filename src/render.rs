//! Textual rendering of a Grid, optionally with a Path, start and goal drawn on top.

use crate::{Cell, Grid, Path};
use std::fmt;

/// A printable view of a [`Grid`].
///
/// Every row is printed on its own line, with Cells separated by a space. Open Cells are shown
/// as `0`, blocked Cells as `1`, Cells on the Path as `.`, the start as `S` and the goal as `G`.
/// Start and goal are drawn last, so they stay visible on top of the Path.
///
/// ## Examples
/// ```
/// # use maze_search::{render::Overlay, search, Cell, Grid, Strategy};
/// let grid = Grid::from_rows(&[
///     [0u8, 1, 0],
///     [0, 0, 0],
/// ])
/// .unwrap();
/// let (start, goal) = (Cell::new(0, 0), Cell::new(0, 2));
/// let path = search(Strategy::BreadthFirst, &grid, start, goal).unwrap().unwrap();
///
/// let overlay = Overlay::new(&grid).with_path(&path).with_start(start).with_goal(goal);
/// assert_eq!(overlay.to_string(), "S 1 G\n. . .\n");
///
/// assert_eq!(Overlay::new(&grid).to_string(), "0 1 0\n0 0 0\n");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Overlay<'a> {
    grid: &'a Grid,
    path: Option<&'a Path<Cell>>,
    start: Option<Cell>,
    goal: Option<Cell>,
}

impl<'a> Overlay<'a> {
    /// Shows just the Grid
    pub fn new(grid: &'a Grid) -> Overlay<'a> {
        Overlay {
            grid,
            path: None,
            start: None,
            goal: None,
        }
    }

    /// marks every Cell of `path`
    pub fn with_path(self, path: &'a Path<Cell>) -> Overlay<'a> {
        Overlay {
            path: Some(path),
            ..self
        }
    }

    /// marks `start`
    pub fn with_start(self, start: Cell) -> Overlay<'a> {
        Overlay {
            start: Some(start),
            ..self
        }
    }

    /// marks `goal`
    pub fn with_goal(self, goal: Cell) -> Overlay<'a> {
        Overlay {
            goal: Some(goal),
            ..self
        }
    }

    fn symbol(&self, cell: Cell, marker: u8) -> char {
        if self.start == Some(cell) {
            'S'
        } else if self.goal == Some(cell) {
            'G'
        } else if self.path.map_or(false, |path| path.iter().any(|&p| p == cell)) {
            '.'
        } else {
            char::from(b'0' + marker)
        }
    }
}

impl fmt::Display for Overlay<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (row, markers) in self.grid.rows().enumerate() {
            for (col, &marker) in markers.iter().enumerate() {
                if col > 0 {
                    write!(fmt, " ")?;
                }
                write!(fmt, "{}", self.symbol(Cell::new(row, col), marker))?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
