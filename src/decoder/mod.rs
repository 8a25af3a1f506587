//! Encoding decoders.
//!
//! A decoder turns an abstract encoding into a concrete, constraint
//! respecting [`Timetable`] and its makespan. Decoding is a pure function
//! of the encoding and the instance: each call builds its own counters,
//! so the same decoder can be shared across threads.
//!
//! - [`EventDecoder`]: machine-order encodings, round-based event simulation
//! - [`ListDecoder`]: permutation encodings, best-fit gap insertion
//!
//! Invalid encodings (wrong shape, duplicate or missing ids) are contract
//! violations and make the decoders panic.

mod event;
mod list;

pub use event::EventDecoder;
pub use list::ListDecoder;

use crate::instance::Time;
use crate::schedule::Timetable;

/// The outcome of decoding one encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Completion time of the last operation.
    pub makespan: Time,
    /// Every operation with its start and end time.
    pub timetable: Timetable,
    /// Operation ids (`job * m + machine`) in dispatch order.
    pub sequence: Vec<usize>,
}

/// Turns an encoding into a timetable.
pub trait Decoder: Send + Sync {
    /// The encoding this decoder reads.
    type Encoding;

    /// Decodes `encoding` into a full timetable.
    fn decode(&self, encoding: &Self::Encoding) -> Decoded;

    /// Makespan of `encoding`.
    fn makespan(&self, encoding: &Self::Encoding) -> Time {
        self.decode(encoding).makespan
    }
}
