use super::Cost;

use std::sync::Arc;

/// A Path through the Grid
///
/// Stores the visited Cells in order, from the start to the goal (both inclusive), together
/// with the total Cost of walking them. Every step costs `1`, so the Cost of a Path with `n`
/// Cells is `n - 1`.
///
/// Cloning a Path is cheap, the Cells are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    path: Arc<[P]>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Cells and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use maze_search::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 2);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 2);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            path: path.into(),
            cost,
        }
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// the number of Cells in the Path, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Cells.
    ///
    /// Paths returned by a search always contain at least the start.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// the first Cell of the Path, if any
    pub fn first(&self) -> Option<&P> {
        self.path.first()
    }

    /// the last Cell of the Path, if any
    pub fn last(&self) -> Option<&P> {
        self.path.last()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<P> {
        self.path.iter()
    }

    /// the Cells as a slice
    pub fn as_slice(&self) -> &[P] {
        &self.path
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path[..] == rhs[..]
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path[..] == rhs[..]
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Path;
    use crate::Cell;

    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 2);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
        assert_eq!(path.first(), Some(&4));
        assert_eq!(path.last(), Some(&0));
    }

    #[test]
    fn display() {
        let path = Path::new(vec![Cell::new(0, 0), Cell::new(1, 0)], 1);

        assert_eq!(&format!("{}", path), "Path[Cost = 1]: (0, 0) -> (1, 0)");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn clones_share_cells() {
        let path = Path::new(vec![1, 2, 3], 2);
        let other = path.clone();

        assert_eq!(path, other);
        assert_eq!(other.as_slice(), &[1, 2, 3]);
        assert_eq!(other.iter().sum::<i32>(), 6);
    }
}
