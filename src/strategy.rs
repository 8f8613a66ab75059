use crate::{neighbors::Neighborhood, Cell, Cost, ParseStrategyError};
use std::fmt;
use std::str::FromStr;

/// The five search strategies.
///
/// All of them run the same search loop (see [`search`](crate::search)) and only differ in
/// the [`Discipline`] of their frontier and in how they [prioritize](Strategy::priority) Cells.
///
/// | Strategy       | Frontier | Priority of a Cell reached with Cost `g` |
/// |----------------|----------|------------------------------------------|
/// | `DepthFirst`   | stack    | none                                     |
/// | `BreadthFirst` | queue    | none                                     |
/// | `UniformCost`  | min-heap | `g`                                      |
/// | `AStar`        | min-heap | `g + heuristic(cell, goal)`              |
/// | `BestFirst`    | min-heap | `heuristic(cell, goal)`                  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// Depth-First Search
    DepthFirst,
    /// Breadth-First Search, finds a Path with the fewest steps
    BreadthFirst,
    /// Uniform Cost Search
    UniformCost,
    /// A* Search with the Manhattan Distance as Heuristic
    AStar,
    /// Greedy Best-First Search, ignores the Cost spent so far
    BestFirst,
}

/// How the next Cell to expand is taken from the frontier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discipline {
    /// last in, first out
    Lifo,
    /// first in, first out
    Fifo,
    /// lowest priority first, ties in insertion order
    Priority,
}

impl Strategy {
    /// All Strategies, in menu order
    pub const ALL: [Strategy; 5] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
        Strategy::BestFirst,
    ];

    /// the human readable name
    ///
    /// ```
    /// # use maze_search::Strategy;
    /// assert_eq!(Strategy::AStar.name(), "A* Search");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "Depth-First Search",
            Strategy::BreadthFirst => "Breadth-First Search",
            Strategy::UniformCost => "Uniform Cost Search",
            Strategy::AStar => "A* Search",
            Strategy::BestFirst => "Best-First Search",
        }
    }

    /// the key that selects this Strategy in a menu, `"1"` to `"5"`
    pub fn key(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "1",
            Strategy::BreadthFirst => "2",
            Strategy::UniformCost => "3",
            Strategy::AStar => "4",
            Strategy::BestFirst => "5",
        }
    }

    /// The Strategy for a menu key, see [`key`](Strategy::key)
    ///
    /// ```
    /// # use maze_search::Strategy;
    /// assert_eq!(Strategy::from_key("2"), Some(Strategy::BreadthFirst));
    /// assert_eq!(Strategy::from_key("6"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Strategy> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.key() == key.trim())
    }

    /// the frontier Discipline
    pub fn discipline(self) -> Discipline {
        match self {
            Strategy::DepthFirst => Discipline::Lifo,
            Strategy::BreadthFirst => Discipline::Fifo,
            Strategy::UniformCost | Strategy::AStar | Strategy::BestFirst => Discipline::Priority,
        }
    }

    /// The priority of `cell` when it was reached with a Path of Cost `cost`.
    ///
    /// `None` for Strategies that only use insertion order.
    ///
    /// ```
    /// # use maze_search::{neighbors::ManhattanNeighborhood, Cell, Strategy};
    /// let neighborhood = ManhattanNeighborhood::new(8, 8);
    /// let (cell, goal) = (Cell::new(2, 3), Cell::new(7, 7));
    ///
    /// assert_eq!(Strategy::BreadthFirst.priority(&neighborhood, 5, cell, goal), None);
    /// assert_eq!(Strategy::UniformCost.priority(&neighborhood, 5, cell, goal), Some(5));
    /// assert_eq!(Strategy::AStar.priority(&neighborhood, 5, cell, goal), Some(5 + 9));
    /// assert_eq!(Strategy::BestFirst.priority(&neighborhood, 5, cell, goal), Some(9));
    /// ```
    pub fn priority<N: Neighborhood>(
        self,
        neighborhood: &N,
        cost: Cost,
        cell: Cell,
        goal: Cell,
    ) -> Option<Cost> {
        match self {
            Strategy::DepthFirst | Strategy::BreadthFirst => None,
            Strategy::UniformCost => Some(cost),
            Strategy::AStar => Some(cost + neighborhood.heuristic(cell, goal)),
            Strategy::BestFirst => Some(neighborhood.heuristic(cell, goal)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts menu keys (`"1"` to `"5"`) and short names, ignoring case
///
/// ```
/// # use maze_search::Strategy;
/// assert_eq!("A*".parse(), Ok(Strategy::AStar));
/// assert_eq!("greedy".parse(), Ok(Strategy::BestFirst));
/// assert!("dijkstra".parse::<Strategy>().is_err());
/// ```
impl FromStr for Strategy {
    type Err = ParseStrategyError;
    fn from_str(s: &str) -> Result<Strategy, ParseStrategyError> {
        if let Some(strategy) = Strategy::from_key(s) {
            return Ok(strategy);
        }
        let strategy = match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Strategy::DepthFirst,
            "bfs" | "breadth-first" => Strategy::BreadthFirst,
            "ucs" | "uniform-cost" => Strategy::UniformCost,
            "astar" | "a*" | "a-star" => Strategy::AStar,
            "best-first" | "greedy" => Strategy::BestFirst,
            _ => return Err(ParseStrategyError(s.to_owned())),
        };
        Ok(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_key(strategy.key()), Some(strategy));
            assert_eq!(strategy.key().parse(), Ok(strategy));
        }
    }

    #[test]
    fn names_parse() {
        assert_eq!("DFS".parse(), Ok(Strategy::DepthFirst));
        assert_eq!(" bfs ".parse(), Ok(Strategy::BreadthFirst));
        assert_eq!("Uniform-Cost".parse(), Ok(Strategy::UniformCost));
        assert_eq!(
            "".parse::<Strategy>(),
            Err(ParseStrategyError(String::new()))
        );
    }

    #[test]
    fn only_heap_strategies_have_priorities() {
        let neighborhood = crate::neighbors::ManhattanNeighborhood::new(3, 3);
        for strategy in Strategy::ALL {
            let priority = strategy.priority(&neighborhood, 1, Cell::new(0, 0), Cell::new(2, 2));
            assert_eq!(
                priority.is_some(),
                strategy.discipline() == Discipline::Priority,
                "{}",
                strategy
            );
        }
    }
}
