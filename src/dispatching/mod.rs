//! Priority rule composition.
//!
//! A [`RuleEngine`] ranks items by a chain of [`PriorityRule`]s: rules are
//! applied in order and later rules only act as tie-breakers when earlier
//! rules cannot differentiate. The chain is evaluated once per call as a
//! single composite key.
//!
//! [`rules`] defines the most-work-remaining chains shared by the
//! constructive heuristic and the event-simulation decoder.
//!
//! # References
//!
//! Dispatching rule composition: Pinedo (2016), "Scheduling: Theory,
//! Algorithms, and Systems"

mod engine;
pub mod rules;
mod types;

pub use engine::{RuleEngine, TieBreaker};
pub use rules::{job_ranking, machine_ranking, Candidate};
pub use types::PriorityRule;
