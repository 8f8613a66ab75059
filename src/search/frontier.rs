use crate::{strategy::Discipline, Cell, Cost};

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A Cell waiting to be expanded.
///
/// `link` is the key of the Cell's entry in the search's Path arena and `cost` the Cost of
/// the Path that reached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub cell: Cell,
    pub link: usize,
    pub cost: Cost,
}

/// An [`Entry`] in the min-heap, ordered by priority and then by insertion sequence.
#[derive(Debug)]
pub(crate) struct HeapElement {
    priority: Cost,
    seq: u64,
    entry: Entry,
}
impl PartialEq for HeapElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeapElement {}
impl PartialOrd for HeapElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeapElement {
    // BinaryHeap is a max-heap: smaller priorities and earlier insertions compare greater
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.priority
            .cmp(&self.priority)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}

/// The open list of a search, one variant per [`Discipline`].
#[derive(Debug)]
pub(crate) enum Frontier {
    Stack(Vec<Entry>),
    Queue(VecDeque<Entry>),
    Heap { heap: BinaryHeap<HeapElement>, seq: u64 },
}

impl Frontier {
    pub fn new(discipline: Discipline, capacity: usize) -> Frontier {
        match discipline {
            Discipline::Lifo => Frontier::Stack(Vec::with_capacity(capacity)),
            Discipline::Fifo => Frontier::Queue(VecDeque::with_capacity(capacity)),
            Discipline::Priority => Frontier::Heap {
                heap: BinaryHeap::with_capacity(capacity),
                seq: 0,
            },
        }
    }

    /// `priority` is ignored by the Stack and the Queue. A missing priority counts as `0`.
    pub fn push(&mut self, entry: Entry, priority: Option<Cost>) {
        match self {
            Frontier::Stack(stack) => stack.push(entry),
            Frontier::Queue(queue) => queue.push_back(entry),
            Frontier::Heap { heap, seq } => {
                heap.push(HeapElement {
                    priority: priority.unwrap_or_default(),
                    seq: *seq,
                    entry,
                });
                *seq += 1;
            }
        }
    }

    pub fn pop(&mut self) -> Option<Entry> {
        match self {
            Frontier::Stack(stack) => stack.pop(),
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Heap { heap, .. } => heap.pop().map(|element| element.entry),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Stack(stack) => stack.len(),
            Frontier::Queue(queue) => queue.len(),
            Frontier::Heap { heap, .. } => heap.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(row: usize) -> Entry {
        Entry {
            cell: Cell::new(row, 0),
            link: row,
            cost: 0,
        }
    }

    fn drain(frontier: &mut Frontier) -> Vec<usize> {
        std::iter::from_fn(|| frontier.pop())
            .map(|entry| entry.cell.row)
            .collect()
    }

    #[test]
    fn stack_is_lifo() {
        let mut frontier = Frontier::new(Discipline::Lifo, 4);
        for row in 0..3 {
            frontier.push(entry(row), None);
        }
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), vec![2, 1, 0]);
    }

    #[test]
    fn queue_is_fifo() {
        let mut frontier = Frontier::new(Discipline::Fifo, 4);
        for row in 0..3 {
            frontier.push(entry(row), None);
        }
        assert_eq!(drain(&mut frontier), vec![0, 1, 2]);
    }

    #[test]
    fn heap_breaks_ties_by_insertion() {
        let mut frontier = Frontier::new(Discipline::Priority, 4);
        let priorities = [5, 3, 5, 1, 3, 5];
        for (row, &priority) in priorities.iter().enumerate() {
            frontier.push(entry(row), Some(priority));
        }
        assert_eq!(drain(&mut frontier), vec![3, 1, 4, 0, 2, 5]);
        assert_eq!(frontier.len(), 0);
    }
}
