//! Run records.
//!
//! A [`RunRecord`] captures one solved instance: its size, optional known
//! bounds, the echoed duration matrix, the best makespan, the winning
//! operation-id sequence and the wall-clock runtime. With the `serde`
//! feature, records persist as a JSON array.

#[cfg(feature = "serde")]
use std::fs::File;
#[cfg(feature = "serde")]
use std::io::{BufReader, BufWriter};
#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use crate::error::RecordError;
use crate::instance::format::KnownBounds;
use crate::instance::{Instance, Time};
use crate::solver::{Solution, TrialSummary};

/// Persisted summary of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    pub n: usize,
    pub m: usize,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub upperbound: Option<Time>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub lowerbound: Option<Time>,
    pub processing_times: Vec<Vec<Time>>,
    pub makespan: Time,
    /// Mean makespan over trials, truncated.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub mean: Option<Time>,
    pub sequence: Vec<usize>,
    /// Seconds.
    pub runtime: f64,
}

impl RunRecord {
    /// Record of a single run.
    pub fn from_solution(
        instance: &Instance,
        bounds: Option<KnownBounds>,
        solution: &Solution,
    ) -> Self {
        Self {
            n: instance.jobs(),
            m: instance.machines(),
            upperbound: bounds.map(|b| b.upper),
            lowerbound: bounds.map(|b| b.lower),
            processing_times: instance.to_rows(),
            makespan: solution.makespan,
            mean: None,
            sequence: solution.sequence.clone(),
            runtime: solution.runtime.as_secs_f64(),
        }
    }

    /// Record of a multi-trial run: best makespan and sequence, truncated
    /// mean and the runtime of all trials.
    pub fn from_trials(
        instance: &Instance,
        bounds: Option<KnownBounds>,
        summary: &TrialSummary,
    ) -> Self {
        Self {
            mean: Some(summary.mean as Time),
            runtime: summary.runtime.as_secs_f64(),
            ..Self::from_solution(instance, bounds, &summary.best)
        }
    }
}

/// Writes records as a JSON array.
#[cfg(feature = "serde")]
pub fn save_records(path: impl AsRef<Path>, records: &[RunRecord]) -> Result<(), RecordError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, records)?;
    Ok(())
}

/// Reads a JSON array of records.
#[cfg(feature = "serde")]
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RunRecord>, RecordError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::SaConfig;
    use crate::solver::{run_trials, solve, Strategy};

    fn two_by_two() -> Instance {
        Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap()
    }

    #[test]
    fn test_from_solution() {
        let inst = two_by_two();
        let strategy = Strategy::Annealing(SaConfig::default().with_max_iterations(200).with_seed(2));
        let solution = solve(&inst, &strategy).unwrap();
        let bounds = KnownBounds { upper: 6, lower: 6 };
        let record = RunRecord::from_solution(&inst, Some(bounds), &solution);
        assert_eq!(record.n, 2);
        assert_eq!(record.m, 2);
        assert_eq!(record.upperbound, Some(6));
        assert_eq!(record.processing_times, vec![vec![3, 2], vec![2, 4]]);
        assert_eq!(record.makespan, 6);
        assert_eq!(record.mean, None);
        assert_eq!(record.sequence.len(), 4);
        assert_eq!(record.lowerbound, Some(6));
    }

    #[test]
    fn test_from_trials() {
        let inst = two_by_two();
        let strategy = Strategy::Annealing(SaConfig::default().with_max_iterations(200));
        let summary = run_trials(&inst, &strategy, 3, 7).unwrap();
        let record = RunRecord::from_trials(&inst, None, &summary);
        assert_eq!(record.makespan, summary.best.makespan);
        assert_eq!(record.mean, Some(summary.mean as Time));
        assert_eq!(record.upperbound, None);
        assert_eq!(record.lowerbound, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_field_names() {
        let record = RunRecord {
            n: 1,
            m: 2,
            upperbound: Some(9),
            lowerbound: Some(8),
            processing_times: vec![vec![4, 5]],
            makespan: 9,
            mean: None,
            sequence: vec![0, 1],
            runtime: 0.5,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["upperbound"], 9);
        assert_eq!(json["processing_times"][0][1], 5);
        assert!(json.get("mean").is_none());

        let back: RunRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
