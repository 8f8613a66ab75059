//! The movement rules and the Heuristic used by the informed searches

use crate::{Cell, Cost};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// It provides a function to query all neighboring Cells of an existing Cell and a Heuristic
/// for how long it might take to reach a goal from a Cell.
///
/// The order in which neighbors are produced is part of the contract: every search expands
/// neighbors in exactly this order, so it decides which of several equally good Paths is found.
pub trait Neighborhood: Clone + Debug {
    /// Pushes all Neighbors of `point` that lie within the Grid onto `target`.
    ///
    /// Note that it is not necessary to check whether the Cell at a Point is blocked or not.
    /// That check is done by the [`Grid`](crate::Grid).
    fn get_all_neighbors(&self, point: Cell, target: &mut Vec<Cell>);
    /// Gives a Heuristic for how long it takes to reach `goal` from `point`.
    ///
    /// This is usually the Distance between the two Points in the Metric of your Neighborhood.
    fn heuristic(&self, point: Cell, goal: Cell) -> Cost;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// Neighbors are always produced in the order up, down, left, right.
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
    width: usize,
    height: usize,
}

/// up, down, left, right as (row, col) offsets
const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `width` (number of columns) and `height` (number of rows) are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { width, height }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Cell, target: &mut Vec<Cell>) {
        let (width, height) = (self.width as isize, self.height as isize);
        let (row, col) = (point.row as isize, point.col as isize);
        for (d_row, d_col) in STEPS {
            let (row, col) = (row + d_row, col + d_col);
            if row >= 0 && col >= 0 && row < height && col < width {
                target.push(Cell::new(row as usize, col as usize));
            }
        }
    }
    fn heuristic(&self, point: Cell, goal: Cell) -> Cost {
        manhattan_distance(point, goal)
    }
}

/// The Manhattan Distance `|a.row - b.row| + |a.col - b.col|` between two Cells.
///
/// Admissible and consistent for unit-cost movement along the 4 cardinal directions.
///
/// ## Examples
/// ```
/// # use maze_search::{neighbors::manhattan_distance, Cell};
/// assert_eq!(manhattan_distance(Cell::new(3, 1), Cell::new(0, 0)), 4);
/// assert_eq!(manhattan_distance(Cell::new(0, 0), Cell::new(7, 7)), 14);
/// ```
pub fn manhattan_distance(a: Cell, b: Cell) -> Cost {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(neighborhood: &ManhattanNeighborhood, point: (usize, usize)) -> Vec<(usize, usize)> {
        let mut target = vec![];
        neighborhood.get_all_neighbors(point.into(), &mut target);
        target.into_iter().map(Into::into).collect()
    }

    #[test]
    fn manhattan_get_all_neighbors() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);
        assert_eq!(
            neighbors_of(&neighborhood, (2, 2)),
            vec![(1, 2), (3, 2), (2, 1), (2, 3)],
        );
    }

    #[test]
    fn manhattan_get_all_neighbors_at_border() {
        let neighborhood = ManhattanNeighborhood::new(5, 3);
        assert_eq!(neighbors_of(&neighborhood, (0, 2)), vec![(1, 2), (0, 1), (0, 3)]);
        assert_eq!(neighbors_of(&neighborhood, (2, 4)), vec![(1, 4), (2, 3)]);
        assert!(neighbors_of(&ManhattanNeighborhood::new(1, 1), (0, 0)).is_empty());
    }

    #[test]
    fn manhattan_get_all_neighbors_appends() {
        let neighborhood = ManhattanNeighborhood::new(2, 2);
        let mut target = vec![Cell::new(9, 9)];
        neighborhood.get_all_neighbors(Cell::new(0, 0), &mut target);
        assert_eq!(target, vec![Cell::new(9, 9), Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn manhattan_heuristic() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);
        assert_eq!(neighborhood.heuristic(Cell::new(3, 1), Cell::new(0, 0)), 3 + 1);
        assert_eq!(neighborhood.heuristic(Cell::new(2, 2), Cell::new(2, 2)), 0);
    }
}
