//! Rule composition engine.

use std::cmp::Ordering;

use super::types::PriorityRule;

/// Strategy for breaking ties when all rules produce equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the original order (stable sort).
    PreserveOrder,

    /// Break ties by item index (deterministic).
    ByIndex,
}

/// Ranks items by a lexicographic key built from a list of rules.
///
/// A later rule is only consulted when every earlier rule ties, so the
/// rule list reads as a tie-break chain. Keys are computed once per call.
///
/// # Examples
///
/// ```
/// use u_openshop::dispatching::{PriorityRule, RuleEngine, TieBreaker};
///
/// struct Smallest;
/// impl PriorityRule<u32, ()> for Smallest {
///     fn name(&self) -> &str { "Smallest" }
///     fn score(&self, v: &u32, _: &()) -> i64 { *v as i64 }
/// }
///
/// let engine = RuleEngine::new()
///     .with_rule(Smallest)
///     .with_tie_breaker(TieBreaker::ByIndex);
/// assert_eq!(engine.sort_indices(&[3, 1, 2], &()), vec![1, 2, 0]);
/// ```
pub struct RuleEngine<T, C> {
    rules: Vec<Box<dyn PriorityRule<T, C>>>,
    tie_breaker: TieBreaker,
}

impl<T, C> RuleEngine<T, C> {
    /// Creates an engine with no rules that preserves input order.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::PreserveOrder,
        }
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: PriorityRule<T, C> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// The composite key of one item, one score per rule.
    pub fn key(&self, item: &T, context: &C) -> Vec<i64> {
        self.rules.iter().map(|r| r.score(item, context)).collect()
    }

    fn compare(&self, keys: &[Vec<i64>], a: usize, b: usize) -> Ordering {
        keys[a].cmp(&keys[b]).then_with(|| match self.tie_breaker {
            TieBreaker::PreserveOrder => Ordering::Equal,
            TieBreaker::ByIndex => a.cmp(&b),
        })
    }

    /// Sorts items by priority (lowest key first = highest priority).
    ///
    /// Returns indices into the original slice, sorted by priority.
    pub fn sort_indices(&self, items: &[T], context: &C) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }
        let keys: Vec<Vec<i64>> = items.iter().map(|item| self.key(item, context)).collect();
        indices.sort_by(|&a, &b| self.compare(&keys, a, b));
        indices
    }

    /// Sorts items by priority and returns references in sorted order.
    pub fn sort<'a>(&self, items: &'a [T], context: &C) -> Vec<&'a T> {
        self.sort_indices(items, context)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }

    /// Returns the index of the highest-priority item.
    ///
    /// The first item wins among exact ties. Returns `None` if the slice
    /// is empty.
    pub fn select_best(&self, items: &[T], context: &C) -> Option<usize> {
        let keys: Vec<Vec<i64>> = items.iter().map(|item| self.key(item, context)).collect();
        (0..items.len()).min_by(|&a, &b| self.compare(&keys, a, b))
    }
}

impl<T, C> Default for RuleEngine<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
