//! Plain-text instance format.
//!
//! ```text
//! n m
//! d(0,0) d(0,1) ... d(0,m-1)
//! ...
//! d(n-1,0) ...      d(n-1,m-1)
//! ub lb            <- optional known bounds
//! ```
//!
//! Values are whitespace separated. The bounds line is recognized when a
//! line with at least two values follows the duration rows.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::{Instance, Time};
use crate::error::InstanceError;

/// Published upper/lower makespan bounds for an instance.
///
/// Pass-through data: the engine never computes or checks these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownBounds {
    pub upper: Time,
    pub lower: Time,
}

/// An instance together with its optional known bounds, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceFile {
    pub instance: Instance,
    pub bounds: Option<KnownBounds>,
}

impl InstanceFile {
    pub fn new(instance: Instance, bounds: Option<KnownBounds>) -> Self {
        Self { instance, bounds }
    }

    /// Reads and parses an instance file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        std::fs::read_to_string(path)?.parse()
    }

    /// Writes the instance in the text format.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), InstanceError> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

fn parse_values(line: &str, line_no: usize) -> Result<Vec<Time>, InstanceError> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<Time>()
                .map_err(|_| InstanceError::parse(line_no, format!("invalid number '{tok}'")))
        })
        .collect()
}

impl FromStr for InstanceFile {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (line_no, header) = lines
            .next()
            .ok_or_else(|| InstanceError::parse(1, "missing 'n m' header"))?;
        let header = parse_values(header, line_no)?;
        if header.len() < 2 {
            return Err(InstanceError::parse(line_no, "header must contain n and m"));
        }
        let dimension = |value: Time| {
            usize::try_from(value).map_err(|_| {
                InstanceError::parse(line_no, format!("dimension {value} is too large"))
            })
        };
        let (jobs, machines) = (dimension(header[0])?, dimension(header[1])?);

        let mut rows = Vec::with_capacity(jobs.min(s.lines().count()));
        for job in 0..jobs {
            let (line_no, line) = lines.next().ok_or_else(|| {
                InstanceError::parse(job + 2, format!("missing duration row for job {job}"))
            })?;
            let row = parse_values(line, line_no)?;
            if row.len() < machines {
                return Err(InstanceError::parse(
                    line_no,
                    format!("expected {machines} durations, found {}", row.len()),
                ));
            }
            rows.push(row[..machines].to_vec());
        }

        let mut bounds = None;
        for (line_no, line) in lines {
            let values = parse_values(line, line_no)?;
            if values.len() >= 2 {
                bounds = Some(KnownBounds {
                    upper: values[0],
                    lower: values[1],
                });
            }
        }

        Ok(Self {
            instance: Instance::new(rows)?,
            bounds,
        })
    }
}

impl FromStr for Instance {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstanceFile::from_str(s).map(|file| file.instance)
    }
}

impl fmt::Display for InstanceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inst = &self.instance;
        writeln!(f, "{} {}", inst.jobs(), inst.machines())?;
        for job in 0..inst.jobs() {
            let row: Vec<String> = inst.row(job).iter().map(Time::to_string).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        if let Some(b) = self.bounds {
            writeln!(f, "{} {}", b.upper, b.lower)?;
        }
        Ok(())
    }
}
