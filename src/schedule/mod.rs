//! Schedule representation.
//!
//! - [`encoding`]: the abstract encodings the searches mutate
//! - [`timetable`]: concrete `(job, machine, start, end)` placements
//! - [`state`]: per-run job/machine counters used while building timetables
//! - [`validation`]: feasibility checks for timetables

pub mod encoding;
pub mod state;
pub mod timetable;
pub mod validation;

pub use encoding::{is_permutation, MachineOrder};
pub use state::{JobState, MachineState, ShopState};
pub use timetable::{ScheduledOperation, Timetable};
pub use validation::{check_feasibility, FeasibilityError};
