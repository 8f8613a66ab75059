#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to compare classic search strategies on a 2D Grid.
//!
//! ## Introduction
//! Given a static occupancy Grid, a start Cell and a goal Cell, this crate searches for a Path
//! using one of five classic strategies:
//! - Depth-First Search
//! - Breadth-First Search
//! - Uniform Cost Search
//! - A* Search
//! - (Greedy) Best-First Search
//!
//! All of them share a single search loop and only differ in the order in which Cells are taken
//! from the frontier. Movement is restricted to the 4 cardinal directions and every step costs
//! `1`. Neighbors are always considered in the order up, down, left, right, and Cells with equal
//! priority are expanded in the order they were discovered, so every search is reproducible.
//!
//! ## Examples
//! Creating the Grid:
//! ```
//! use maze_search::Grid;
//!
//! // 0 = open, 1 = blocked
//! let grid = Grid::from_rows(&[
//!     [0u8, 0, 1, 0],
//!     [1, 0, 1, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//!
//! assert_eq!((grid.width(), grid.height()), (4, 3));
//! ```
//! A Grid can also be parsed from text, see [`Grid`]'s `FromStr` implementation.
//!
//! ### Pathfinding
//! Finding a Path:
//! ```
//! # use maze_search::{search, Cell, Grid, Strategy};
//! # let grid = Grid::from_rows(&[
//! #     [0u8, 0, 1, 0],
//! #     [1, 0, 1, 0],
//! #     [0, 0, 0, 0],
//! # ])
//! # .unwrap();
//! let start = Cell::new(0, 0);
//! let goal = Cell::new(0, 3);
//!
//! // search returns Ok(Some(Path)) on success
//! let path = search(Strategy::AStar, &grid, start, goal).unwrap();
//!
//! assert!(path.is_some());
//! let path = path.unwrap();
//! assert_eq!(path.first(), Some(&start));
//! assert_eq!(path.last(), Some(&goal));
//! assert_eq!(path.cost(), 7);
//! ```
//! Not finding a Path is not an error:
//! ```
//! # use maze_search::{search, Cell, Grid, Strategy};
//! let grid = Grid::from_rows(&[[0u8, 1, 0]]).unwrap();
//!
//! let path = search(Strategy::BreadthFirst, &grid, Cell::new(0, 0), Cell::new(0, 2));
//!
//! assert_eq!(path, Ok(None));
//! ```
//! Asking for a start or goal that is outside of the Grid or blocked is, unless the
//! [`SearchConfig`] says otherwise:
//! ```
//! # use maze_search::{search, search_with_config, Cell, Grid, SearchConfig, SearchError, Strategy};
//! let grid = Grid::from_rows(&[[0u8, 1, 0]]).unwrap();
//!
//! let path = search(Strategy::BreadthFirst, &grid, Cell::new(0, 0), Cell::new(0, 1));
//! assert_eq!(path, Err(SearchError::Blocked { cell: Cell::new(0, 1) }));
//!
//! let config = SearchConfig { validate_endpoints: false, ..Default::default() };
//! let path = search_with_config(Strategy::BreadthFirst, &grid, Cell::new(0, 0), Cell::new(0, 1), config);
//! assert_eq!(path, Ok(None));
//! ```
//!
//! ### Comparing Strategies
//! ```
//! use maze_search::{compare::solve_all, grid::{DEMO_GOAL, DEMO_START}, render::Overlay, Grid, SearchConfig};
//!
//! let grid = Grid::demo();
//! for (strategy, outcome) in solve_all(&grid, DEMO_START, DEMO_GOAL, SearchConfig::default()) {
//!     let path = outcome.unwrap().unwrap();
//!     println!("Path found using {}:", strategy);
//!     println!("{}", Overlay::new(&grid).with_path(&path).with_start(DEMO_START).with_goal(DEMO_GOAL));
//! }
//! ```
//!
//! ## Optimality
//! Breadth-First, Uniform Cost and A* Search return Paths with the fewest steps. Depth-First and
//! Best-First Search return the first Path they stumble upon.
//!
//! A Cell is never expanded twice, even if it is later reached more cheaply. With unit step
//! costs and the consistent Manhattan Heuristic, the first expansion of a Cell is always via a
//! cheapest Path, so this does not affect the results above.

mod cell;
pub use self::cell::Cell;

pub mod grid;
pub use self::grid::Grid;

pub mod neighbors;

mod path;
pub use self::path::{Cost, Path};

mod strategy;
pub use self::strategy::{Discipline, Strategy};

mod search;
pub use self::search::{
    a_star_search, best_first_search, breadth_first_search, depth_first_search, search,
    search_with_config, uniform_cost_search,
};

mod config;
pub use self::config::SearchConfig;

mod error;
pub use self::error::{GridError, ParseStrategyError, SearchError};

pub mod compare;
pub mod render;

/// A [`HashSet`](hashbrown::HashSet) of Cells
pub type CellSet = hashbrown::HashSet<Cell>;

/// The most commonly used types and functions
pub mod prelude {
    pub use crate::{
        neighbors::{ManhattanNeighborhood, Neighborhood},
        search, search_with_config, Cell, Grid, Path, SearchConfig, SearchError, Strategy,
    };
}
