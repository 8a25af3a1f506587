//! Concrete timetables.
//!
//! A timetable is derived data: it is produced by decoding an encoding and
//! is never treated as ground truth by the search.

use crate::instance::Time;

/// One operation placed on the time axis, occupying `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledOperation {
    pub job: usize,
    pub machine: usize,
    pub start: Time,
    pub end: Time,
}

impl ScheduledOperation {
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Whether the two half-open intervals intersect.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// All scheduled operations of a solution, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    operations: Vec<ScheduledOperation>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            operations: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, op: ScheduledOperation) {
        self.operations.push(op);
    }

    pub fn operations(&self) -> &[ScheduledOperation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Completion time of the last operation (0 when empty).
    pub fn makespan(&self) -> Time {
        self.operations.iter().map(|op| op.end).max().unwrap_or(0)
    }

    /// Operations on one machine, sorted by start time.
    pub fn machine_operations(&self, machine: usize) -> Vec<ScheduledOperation> {
        self.sorted_by_start(|op| op.machine == machine)
    }

    /// Operations of one job, sorted by start time.
    pub fn job_operations(&self, job: usize) -> Vec<ScheduledOperation> {
        self.sorted_by_start(|op| op.job == job)
    }

    fn sorted_by_start(&self, keep: impl Fn(&ScheduledOperation) -> bool) -> Vec<ScheduledOperation> {
        let mut ops: Vec<ScheduledOperation> =
            self.operations.iter().copied().filter(|op| keep(op)).collect();
        ops.sort_by_key(|op| (op.start, op.end));
        ops
    }

    /// `(job, machine, start, end)` tuples sorted by machine, then start.
    ///
    /// This is the export consumed by Gantt-chart renderers.
    pub fn export(&self) -> Vec<(usize, usize, Time, Time)> {
        let mut rows: Vec<_> = self
            .operations
            .iter()
            .map(|op| (op.job, op.machine, op.start, op.end))
            .collect();
        rows.sort_by_key(|&(job, machine, start, _)| (machine, start, job));
        rows
    }

    pub fn into_operations(self) -> Vec<ScheduledOperation> {
        self.operations
    }
}

impl FromIterator<ScheduledOperation> for Timetable {
    fn from_iter<T: IntoIterator<Item = ScheduledOperation>>(iter: T) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(job: usize, machine: usize, start: Time, end: Time) -> ScheduledOperation {
        ScheduledOperation {
            job,
            machine,
            start,
            end,
        }
    }

    #[test]
    fn test_overlap_is_half_open() {
        assert!(op(0, 0, 0, 3).overlaps(&op(1, 0, 2, 5)));
        assert!(!op(0, 0, 0, 3).overlaps(&op(1, 0, 3, 5)));
        assert!(op(0, 0, 1, 2).overlaps(&op(1, 0, 0, 5)));
    }

    #[test]
    fn test_makespan_and_views() {
        let tt: Timetable = vec![op(0, 1, 4, 6), op(0, 0, 0, 3), op(1, 1, 0, 4), op(1, 0, 3, 5)]
            .into_iter()
            .collect();
        assert_eq!(tt.len(), 4);
        assert_eq!(tt.makespan(), 6);
        let m1 = tt.machine_operations(1);
        assert_eq!(m1, vec![op(1, 1, 0, 4), op(0, 1, 4, 6)]);
        let j0 = tt.job_operations(0);
        assert_eq!(j0, vec![op(0, 0, 0, 3), op(0, 1, 4, 6)]);
        assert_eq!(j0[1].duration(), 2);
    }

    #[test]
    fn test_export_order() {
        let tt: Timetable = vec![op(0, 1, 4, 6), op(1, 0, 3, 5), op(0, 0, 0, 3)]
            .into_iter()
            .collect();
        assert_eq!(
            tt.export(),
            vec![(0, 0, 0, 3), (1, 0, 3, 5), (0, 1, 4, 6)]
        );
    }

    #[test]
    fn test_empty() {
        let tt = Timetable::new();
        assert!(tt.is_empty());
        assert_eq!(tt.makespan(), 0);
    }
}
