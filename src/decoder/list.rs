//! List-scheduling decoder for permutation encodings.
//!
//! Operations are inserted one by one in priority order. Each insertion
//! looks at the idle windows of its machine: `[0, ∞)` for an idle machine,
//! otherwise the leading gap before the first busy interval and every gap
//! between busy intervals. Inside a window the operation takes the
//! earliest start that also clears the job's own committed intervals. The
//! feasible window with the least slack wins, the earlier one on equal
//! slack. When no window fits, the operation is appended after both the
//! machine's and the job's last commitment, so decoding never fails.

use super::{Decoded, Decoder};
use crate::instance::{Instance, Time};
use crate::schedule::{is_permutation, ScheduledOperation, Timetable};

/// Half-open busy interval `[start, end)`.
type Interval = (Time, Time);

/// Decodes operation-id permutations by best-fit gap insertion.
///
/// # Examples
///
/// ```
/// use u_openshop::decoder::{Decoder, ListDecoder};
/// use u_openshop::instance::Instance;
///
/// let instance = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
/// let decoder = ListDecoder::new(&instance);
/// // (0,0), (1,1), (1,0), (0,1)
/// assert_eq!(decoder.makespan(&vec![0, 3, 2, 1]), 6);
/// ```
pub struct ListDecoder<'a> {
    instance: &'a Instance,
}

impl<'a> ListDecoder<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
}

/// Idle windows of a machine as `(start, limit)`; `None` is unbounded.
fn machine_windows(busy: &[Interval]) -> Vec<(Time, Option<Time>)> {
    let Some(&(first_start, _)) = busy.first() else {
        return vec![(0, None)];
    };
    let mut windows = Vec::with_capacity(busy.len());
    if first_start > 0 {
        windows.push((0, Some(first_start)));
    }
    for pair in busy.windows(2) {
        let (prev_end, next_start) = (pair[0].1, pair[1].0);
        if next_start > prev_end {
            windows.push((prev_end, Some(next_start)));
        }
    }
    windows
}

/// Earliest start `t >= from` such that `[t, t + duration)` clears every
/// interval in `job_busy` (sorted by start).
fn earliest_job_fit(job_busy: &[Interval], from: Time, duration: Time) -> Time {
    let mut t = from;
    for &(start, end) in job_busy {
        if end <= t {
            continue;
        }
        if start >= t + duration {
            break;
        }
        t = end;
    }
    t
}

fn insert_sorted(intervals: &mut Vec<Interval>, iv: Interval) {
    let pos = intervals.partition_point(|&(s, _)| s < iv.0);
    intervals.insert(pos, iv);
}

impl Decoder for ListDecoder<'_> {
    type Encoding = Vec<usize>;

    fn decode(&self, permutation: &Vec<usize>) -> Decoded {
        let inst = self.instance;
        let total = inst.operation_count();
        assert_eq!(permutation.len(), total, "permutation has wrong length");
        debug_assert!(
            is_permutation(permutation, total),
            "permutation repeats or omits operation ids"
        );

        let mut machine_busy: Vec<Vec<Interval>> = vec![Vec::new(); inst.machines()];
        let mut job_busy: Vec<Vec<Interval>> = vec![Vec::new(); inst.jobs()];
        let mut timetable = Timetable::with_capacity(total);

        for &id in permutation {
            let op = inst.operation(id);
            let duration = inst.duration(op.job, op.machine);
            let on_machine = &machine_busy[op.machine];
            let on_job = &job_busy[op.job];

            let mut best: Option<(Time, Time)> = None; // (slack, start)
            for (from, limit) in machine_windows(on_machine) {
                let start = earliest_job_fit(on_job, from, duration);
                let end = start + duration;
                let slack = match limit {
                    Some(limit) if end > limit => continue,
                    Some(limit) => limit - end,
                    None => Time::MAX,
                };
                if best.map_or(true, |(s, _)| slack < s) {
                    best = Some((slack, start));
                }
            }

            let start = match best {
                Some((_, start)) => start,
                None => {
                    let machine_end = on_machine.iter().map(|iv| iv.1).max().unwrap_or(0);
                    let job_end = on_job.iter().map(|iv| iv.1).max().unwrap_or(0);
                    machine_end.max(job_end)
                }
            };
            let end = start + duration;

            insert_sorted(&mut machine_busy[op.machine], (start, end));
            insert_sorted(&mut job_busy[op.job], (start, end));
            timetable.push(ScheduledOperation {
                job: op.job,
                machine: op.machine,
                start,
                end,
            });
        }

        Decoded {
            makespan: timetable.makespan(),
            timetable,
            sequence: permutation.clone(),
        }
    }
}
