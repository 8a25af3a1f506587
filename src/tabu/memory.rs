//! Bounded short-term memory of visited solutions.

use std::collections::VecDeque;

/// FIFO list of recently visited solutions.
///
/// Holds at most `capacity` entries; pushing onto a full list evicts the
/// oldest entry. Membership is a linear scan, which is cheap for the short
/// lists tabu search uses.
///
/// # Examples
///
/// ```
/// use u_openshop::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// tabu.push(1);
/// tabu.push(2);
/// tabu.push(3);
/// assert!(!tabu.contains(&1));
/// assert!(tabu.contains(&3));
/// assert_eq!(tabu.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuList<S> {
    entries: VecDeque<S>,
    capacity: usize,
}

impl<S: PartialEq> TabuList<S> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a solution, evicting the oldest one when full.
    pub fn push(&mut self, solution: S) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(solution);
    }

    pub fn contains(&self, solution: &S) -> bool {
        self.entries.iter().any(|s| s == solution)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
