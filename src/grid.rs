//! The occupancy Grid that all searches run on.

use crate::{
    neighbors::{ManhattanNeighborhood, Neighborhood},
    Cell, GridError, SearchError,
};
use std::str::FromStr;

/// Marker of a Cell that can be walked across
pub const OPEN: u8 = 0;
/// Marker of a Cell that cannot be walked across
pub const BLOCKED: u8 = 1;

/// The 8x8 reference maze. A Path from [`DEMO_START`] to [`DEMO_GOAL`] exists: down the left
/// column, across row 4 and down the right column.
pub const DEMO_MAZE: [[u8; 8]; 8] = [
    [0, 0, 1, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 1, 0, 1, 0],
    [0, 0, 0, 0, 1, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 1, 0],
];
/// The start Cell used with [`DEMO_MAZE`]
pub const DEMO_START: Cell = Cell::new(0, 0);
/// The goal Cell used with [`DEMO_MAZE`]
pub const DEMO_GOAL: Cell = Cell::new(7, 7);

/// A rectangular 2D occupancy Grid.
///
/// Every Cell is either [`OPEN`] or [`BLOCKED`]. The Grid is fixed once constructed, which makes
/// it safe to share between any number of concurrent searches.
///
/// ## Examples
/// ```
/// # use maze_search::{Cell, Grid};
/// let grid = Grid::from_rows(&[
///     [0u8, 0, 1],
///     [1, 0, 0],
/// ])
/// .unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (3, 2));
/// assert!(grid.is_open(Cell::new(1, 1)));
/// assert!(!grid.is_open(Cell::new(0, 2)));
/// assert!(!grid.is_open(Cell::new(5, 5)));
///
/// assert_eq!(grid.neighbors(Cell::new(0, 1)), vec![Cell::new(1, 1), Cell::new(0, 0)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<u8>,
    neighborhood: ManhattanNeighborhood,
}

impl Grid {
    /// Creates a Grid from its rows, top to bottom.
    ///
    /// All rows need the same, non-zero length and may only contain [`OPEN`] and [`BLOCKED`].
    ///
    /// ```
    /// # use maze_search::{Grid, GridError};
    /// assert_eq!(Grid::from_rows::<[u8; 0]>(&[]), Err(GridError::Empty));
    /// assert_eq!(
    ///     Grid::from_rows(&[vec![0u8, 0], vec![0]]),
    ///     Err(GridError::Ragged { row: 1, expected: 2, found: 1 })
    /// );
    /// assert_eq!(
    ///     Grid::from_rows(&[[0u8, 2]]),
    ///     Err(GridError::InvalidMarker { row: 0, col: 1, value: 2 })
    /// );
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row, markers) in rows.iter().enumerate() {
            let markers = markers.as_ref();
            if markers.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: markers.len(),
                });
            }
            for (col, &value) in markers.iter().enumerate() {
                if value != OPEN && value != BLOCKED {
                    return Err(GridError::InvalidMarker { row, col, value });
                }
                tiles.push(value);
            }
        }

        Ok(Grid::new_unchecked(width, height, tiles))
    }

    /// The reference maze [`DEMO_MAZE`]
    pub fn demo() -> Grid {
        let tiles = DEMO_MAZE.iter().flatten().copied().collect();
        Grid::new_unchecked(8, 8, tiles)
    }

    fn new_unchecked(width: usize, height: usize, tiles: Vec<u8>) -> Grid {
        Grid {
            width,
            height,
            tiles,
            neighborhood: ManhattanNeighborhood::new(width, height),
        }
    }

    /// number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// total number of Cells
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    /// the Neighborhood describing movement on this Grid
    pub fn neighborhood(&self) -> &ManhattanNeighborhood {
        &self.neighborhood
    }

    /// `true` if `cell` lies within the Grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// the marker at `cell`, or `None` if it lies outside of the Grid
    pub fn get(&self, cell: Cell) -> Option<u8> {
        if self.contains(cell) {
            Some(self.tiles[cell.row * self.width + cell.col])
        } else {
            None
        }
    }

    /// `true` if `cell` lies within the Grid and can be walked across
    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell) == Some(OPEN)
    }

    /// Iterates over the rows of the Grid, top to bottom
    pub fn rows(&self) -> std::slice::Chunks<u8> {
        self.tiles.chunks(self.width)
    }

    /// All open Cells reachable from `cell` in a single step, in the order up, down, left, right.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut target = Vec::with_capacity(4);
        self.neighbors_into(cell, &mut target);
        target
    }

    /// Same as [`neighbors`](Grid::neighbors), but pushes the Cells onto `target` instead of
    /// allocating a new Vec.
    pub fn neighbors_into(&self, cell: Cell, target: &mut Vec<Cell>) {
        let first = target.len();
        self.neighborhood.get_all_neighbors(cell, target);
        let mut index = first;
        while index < target.len() {
            if self.is_open(target[index]) {
                index += 1;
            } else {
                target.remove(index);
            }
        }
    }

    /// Ensures that `cell` can be used as the start or goal of a search
    pub fn check_endpoint(&self, cell: Cell) -> Result<(), SearchError> {
        match self.get(cell) {
            None => Err(SearchError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            }),
            Some(BLOCKED) => Err(SearchError::Blocked { cell }),
            Some(_) => Ok(()),
        }
    }
}

/// Parses a Grid from whitespace separated markers, one row per line.
///
/// Blank lines are skipped.
///
/// ```
/// # use maze_search::Grid;
/// let grid: Grid = "
///     0 0 1
///     1 0 0
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid, Grid::from_rows(&[[0u8, 0, 1], [1, 0, 0]]).unwrap());
/// ```
impl FromStr for Grid {
    type Err = GridError;
    fn from_str(s: &str) -> Result<Grid, GridError> {
        let mut rows = vec![];
        for (line, text) in s.lines().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            let row = text
                .split_whitespace()
                .map(|token| {
                    token.parse::<u8>().map_err(|_| GridError::Parse {
                        line,
                        token: token.to_owned(),
                    })
                })
                .collect::<Result<Vec<u8>, GridError>>()?;
            rows.push(row);
        }
        Grid::from_rows(&rows)
    }
}
