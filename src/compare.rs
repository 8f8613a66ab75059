//! Running every [`Strategy`] against the same Grid.

use crate::{search_with_config, Cell, Grid, Path, SearchConfig, SearchError, Strategy};

/// The result of a single search
pub type Outcome = Result<Option<Path<Cell>>, SearchError>;

/// Runs all [`Strategy::ALL`] on `grid` and returns their results, in the order of
/// [`Strategy::ALL`].
///
/// The Grid is only read, so with the `parallel` feature (enabled by default) the searches run
/// concurrently on the rayon thread pool.
///
/// ## Examples
/// ```
/// # use maze_search::{compare::solve_all, grid::{DEMO_GOAL, DEMO_START}, Grid, SearchConfig, Strategy};
/// let results = solve_all(&Grid::demo(), DEMO_START, DEMO_GOAL, SearchConfig::default());
///
/// assert_eq!(results.len(), 5);
/// assert_eq!(results[0].0, Strategy::DepthFirst);
/// assert!(results.iter().all(|(_, outcome)| matches!(outcome, Ok(Some(_)))));
/// ```
pub fn solve_all(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    config: SearchConfig,
) -> Vec<(Strategy, Outcome)> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Strategy::ALL
            .as_slice()
            .par_iter()
            .map(|&strategy| {
                let outcome = search_with_config(strategy, grid, start, goal, config);
                (strategy, outcome)
            })
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        Strategy::ALL
            .iter()
            .map(|&strategy| {
                let outcome = search_with_config(strategy, grid, start, goal, config);
                (strategy, outcome)
            })
            .collect()
    }
}
