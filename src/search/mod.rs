//! The search loop shared by every [`Strategy`].

mod frontier;
use self::frontier::{Entry, Frontier};

use crate::{Cell, CellSet, Grid, Path, SearchConfig, SearchError, Strategy};
use log::{debug, trace};

/// One step of a Path under construction: the Cell and the link it was reached from.
#[derive(Clone, Copy, Debug)]
struct Link {
    cell: Cell,
    parent: Option<usize>,
}

/// Searches `grid` for a Path from `start` to `goal` using `strategy`.
///
/// Uses the default [`SearchConfig`], so an out-of-bounds or blocked `start` or `goal` is
/// rejected with a [`SearchError`].
///
/// ## Examples
/// Basic usage:
/// ```
/// # use maze_search::{search, Cell, Grid, Strategy};
/// // 0 = open, 1 = blocked
/// let grid = Grid::from_rows(&[
///     [0u8, 1, 0],
///     [0, 1, 0],
///     [0, 0, 0],
/// ])
/// .unwrap();
///
/// let path = search(Strategy::BreadthFirst, &grid, Cell::new(0, 0), Cell::new(0, 2))
///     .unwrap()
///     .expect("a Path exists");
///
/// assert_eq!(path.cost(), 6);
/// assert_eq!(path.first(), Some(&Cell::new(0, 0)));
/// assert_eq!(path.last(), Some(&Cell::new(0, 2)));
/// ```
///
/// If the goal cannot be reached, `Ok(None)` is returned:
/// ```
/// # use maze_search::{search, Cell, Grid, Strategy};
/// let grid = Grid::from_rows(&[[0u8, 1, 0]]).unwrap();
///
/// let path = search(Strategy::AStar, &grid, Cell::new(0, 0), Cell::new(0, 2));
///
/// assert_eq!(path, Ok(None));
/// ```
///
/// ## Returns
/// the Path, if one was found. The first Cell in the Path is always the `start` and the last is
/// the `goal`. If `start == goal`, the Path consists of that single Cell.
pub fn search(
    strategy: Strategy,
    grid: &Grid,
    start: Cell,
    goal: Cell,
) -> Result<Option<Path<Cell>>, SearchError> {
    search_with_config(strategy, grid, start, goal, SearchConfig::default())
}

/// Same as [`search`], with explicit options.
///
/// ```
/// # use maze_search::{search_with_config, Cell, Grid, SearchConfig, SearchError, Strategy};
/// let grid = Grid::demo();
/// let blocked = Cell::new(0, 2);
///
/// assert_eq!(
///     search_with_config(Strategy::DepthFirst, &grid, Cell::new(0, 0), blocked, SearchConfig::STRICT),
///     Err(SearchError::Blocked { cell: blocked })
/// );
/// assert_eq!(
///     search_with_config(Strategy::DepthFirst, &grid, Cell::new(0, 0), blocked, SearchConfig::LENIENT),
///     Ok(None)
/// );
/// ```
///
/// ## Visited Cells
/// A Cell is expanded at most once. Once it has been taken from the frontier, any later
/// discovery of the same Cell is discarded, even if it was reached more cheaply. Since every
/// step costs the same, this does not affect the Cost of Paths found by Uniform Cost and A*
/// Search.
pub fn search_with_config(
    strategy: Strategy,
    grid: &Grid,
    start: Cell,
    goal: Cell,
    config: SearchConfig,
) -> Result<Option<Path<Cell>>, SearchError> {
    if let Err(err) = grid
        .check_endpoint(start)
        .and_then(|_| grid.check_endpoint(goal))
    {
        if config.validate_endpoints {
            return Err(err);
        }
        debug!("{}: {}, no Path", strategy, err);
        return Ok(None);
    }

    let neighborhood = grid.neighborhood();
    let mut links = slab::Slab::with_capacity(config.size_hint);
    let mut visited = CellSet::with_capacity(config.size_hint);
    let mut next = Frontier::new(strategy.discipline(), config.size_hint / 2);

    let root = links.insert(Link {
        cell: start,
        parent: None,
    });
    next.push(
        Entry {
            cell: start,
            link: root,
            cost: 0,
        },
        strategy.priority(neighborhood, 0, start, goal),
    );

    let mut all_neighbors = Vec::with_capacity(4);

    while let Some(Entry {
        cell: current_id,
        link,
        cost: current_cost,
    }) = next.pop()
    {
        if !visited.insert(current_id) {
            continue;
        }
        if current_id == goal {
            let path = resolve(&links, link, current_cost);
            debug!(
                "{}: found Path of Cost {} after expanding {} Cells",
                strategy,
                path.cost(),
                visited.len()
            );
            return Ok(Some(path));
        }
        trace!("{}: expanding {} at Cost {}", strategy, current_id, current_cost);

        let other_cost = current_cost + 1;

        all_neighbors.clear();
        grid.neighbors_into(current_id, &mut all_neighbors);
        for &other_id in all_neighbors.iter() {
            if visited.contains(&other_id) {
                continue;
            }
            let other_link = links.insert(Link {
                cell: other_id,
                parent: Some(link),
            });
            next.push(
                Entry {
                    cell: other_id,
                    link: other_link,
                    cost: other_cost,
                },
                strategy.priority(neighborhood, other_cost, other_id, goal),
            );
        }
    }

    debug!(
        "{}: no Path after expanding {} Cells ({} left in frontier)",
        strategy,
        visited.len(),
        next.len()
    );
    Ok(None)
}

/// Walks the parent links back to the start
fn resolve(links: &slab::Slab<Link>, goal_link: usize, cost: usize) -> Path<Cell> {
    let steps = {
        let mut steps = Vec::with_capacity(cost + 1);
        let mut current = Some(goal_link);

        while let Some(link) = current {
            let Link { cell, parent } = links[link];
            steps.push(cell);
            current = parent;
        }
        steps.reverse();
        steps
    };

    Path::new(steps, cost)
}

/// Searches using [`Strategy::DepthFirst`], see [`search`]
pub fn depth_first_search(
    grid: &Grid,
    start: Cell,
    goal: Cell,
) -> Result<Option<Path<Cell>>, SearchError> {
    search(Strategy::DepthFirst, grid, start, goal)
}

/// Searches using [`Strategy::BreadthFirst`], see [`search`]
pub fn breadth_first_search(
    grid: &Grid,
    start: Cell,
    goal: Cell,
) -> Result<Option<Path<Cell>>, SearchError> {
    search(Strategy::BreadthFirst, grid, start, goal)
}

/// Searches using [`Strategy::UniformCost`], see [`search`]
pub fn uniform_cost_search(
    grid: &Grid,
    start: Cell,
    goal: Cell,
) -> Result<Option<Path<Cell>>, SearchError> {
    search(Strategy::UniformCost, grid, start, goal)
}

/// Searches using [`Strategy::AStar`], see [`search`]
pub fn a_star_search(
    grid: &Grid,
    start: Cell,
    goal: Cell,
) -> Result<Option<Path<Cell>>, SearchError> {
    search(Strategy::AStar, grid, start, goal)
}

/// Searches using [`Strategy::BestFirst`], see [`search`]
pub fn best_first_search(
    grid: &Grid,
    start: Cell,
    goal: Cell,
) -> Result<Option<Path<Cell>>, SearchError> {
    search(Strategy::BestFirst, grid, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{DEMO_GOAL, DEMO_START};

    fn cells(points: &[(usize, usize)]) -> Vec<Cell> {
        points.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn start_is_goal() {
        let grid = Grid::demo();
        for strategy in Strategy::ALL {
            let path = search(strategy, &grid, DEMO_START, DEMO_START).unwrap().unwrap();
            assert_eq!(path, vec![DEMO_START]);
            assert_eq!(path.cost(), 0);
        }
    }

    #[test]
    fn depth_first_follows_last_neighbor() {
        let path = depth_first_search(&Grid::demo(), DEMO_START, DEMO_GOAL)
            .unwrap()
            .unwrap();
        #[rustfmt::skip]
        assert_eq!(
            path,
            cells(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (2, 3), (1, 3), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (1, 7), (2, 7), (3, 7), (4, 7), (5, 7), (6, 7), (7, 7)]),
        );
        assert_eq!(path.cost(), 18);
    }

    #[test]
    fn best_first_prefers_earlier_ties() {
        let path = best_first_search(&Grid::demo(), DEMO_START, DEMO_GOAL)
            .unwrap()
            .unwrap();
        #[rustfmt::skip]
        assert_eq!(
            path,
            cells(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6), (4, 7), (5, 7), (6, 7), (7, 7)]),
        );
    }

    #[test]
    fn shortest_strategies_agree_on_cost() {
        let grid = Grid::demo();
        for strategy in [Strategy::BreadthFirst, Strategy::UniformCost, Strategy::AStar] {
            let path = search(strategy, &grid, DEMO_START, DEMO_GOAL).unwrap().unwrap();
            assert_eq!(path.cost(), 14, "{}", strategy);
            assert_eq!(path.len(), 15, "{}", strategy);
        }
    }

    #[test]
    fn walled_off_goal() {
        let grid = Grid::from_rows(&[[0u8, 0, 1, 0], [0, 0, 1, 0]]).unwrap();
        for strategy in Strategy::ALL {
            let path = search(strategy, &grid, Cell::new(0, 0), Cell::new(1, 3));
            assert_eq!(path, Ok(None), "{}", strategy);
        }
    }

    #[test]
    fn invalid_endpoints() {
        let grid = Grid::demo();
        let outside = Cell::new(8, 0);
        assert_eq!(
            breadth_first_search(&grid, outside, DEMO_GOAL),
            Err(SearchError::OutOfBounds {
                cell: outside,
                width: 8,
                height: 8
            })
        );
        assert_eq!(
            a_star_search(&grid, DEMO_START, Cell::new(1, 1)),
            Err(SearchError::Blocked {
                cell: Cell::new(1, 1)
            })
        );
        assert_eq!(
            search_with_config(
                Strategy::UniformCost,
                &grid,
                outside,
                DEMO_GOAL,
                SearchConfig::LENIENT
            ),
            Ok(None)
        );
    }

    #[test]
    fn tiny_size_hint() {
        let config = SearchConfig::with_size_hint(0);
        let path = search_with_config(Strategy::AStar, &Grid::demo(), DEMO_START, DEMO_GOAL, config)
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 14);
        assert_eq!(uniform_cost_search(&Grid::demo(), DEMO_START, DEMO_GOAL).unwrap().unwrap().cost(), 14);
    }
}
