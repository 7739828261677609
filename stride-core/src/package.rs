//! Sensor packages and the workout-code dispatcher.
//!
//! A package is a workout code plus the ordered sensor readings for that
//! workout. `read_package` turns one into a `Training`, binding the readings
//! positionally: `action, duration, weight`, then the kind's extra fields.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, StrideError};
use crate::message::InfoMessage;
use crate::training::{Running, SportsWalking, Swimming, Training, WorkoutKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutCode {
    pub code: &'static str,
    pub kind: WorkoutKind,
    pub arity: usize,
}

pub const WORKOUT_CODES: &[WorkoutCode] = &[
    WorkoutCode {
        code: "SWM",
        kind: WorkoutKind::Swimming,
        arity: 5,
    },
    WorkoutCode {
        code: "RUN",
        kind: WorkoutKind::Running,
        arity: 3,
    },
    WorkoutCode {
        code: "WLK",
        kind: WorkoutKind::SportsWalking,
        arity: 4,
    },
];

pub fn lookup_code(code: &str) -> Result<&'static WorkoutCode> {
    WORKOUT_CODES
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| StrideError::UnknownWorkoutType(code.to_string()))
}

fn count(field: &'static str, value: f64) -> Result<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(StrideError::InvalidCount { field, value })
    }
}

/// Build the training selected by `code` from its sensor readings.
pub fn read_package(code: &str, values: &[f64]) -> Result<Training> {
    let entry = lookup_code(code)?;
    if values.len() != entry.arity {
        return Err(StrideError::ArityMismatch {
            code: code.to_string(),
            expected: entry.arity,
            actual: values.len(),
        });
    }
    debug!("read_package code={} values={:?}", code, values);

    let action = count("action", values[0])?;
    let (duration, weight) = (values[1], values[2]);

    let training = match entry.kind {
        WorkoutKind::Running => Running::new(action, duration, weight).into(),
        WorkoutKind::SportsWalking => SportsWalking::new(action, duration, weight, values[3]).into(),
        WorkoutKind::Swimming => {
            let count_pool = count("count_pool", values[4])?;
            Swimming::new(action, duration, weight, values[3], count_pool).into()
        }
    };
    Ok(training)
}

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\(?\s*['"]?(?P<code>[A-Za-z]+)['"]?\s*[,:]?\s*(?:\[(?P<list>[^\[\]]*)\]|(?P<bare>[^\[\]()]*?))\s*\)?\s*,?$"#,
    )
    .expect("package line pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum PackageRepr {
    Named { workout_type: String, data: Vec<f64> },
    Pair(String, Vec<f64>),
}

impl From<PackageRepr> for Package {
    fn from(repr: PackageRepr) -> Self {
        match repr {
            PackageRepr::Named { workout_type, data } | PackageRepr::Pair(workout_type, data) => {
                Package { workout_type, data }
            }
        }
    }
}

/// Unvalidated input for `read_package`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PackageRepr")]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> Result<Training> {
        read_package(&self.workout_type, &self.data)
    }

    /// Parse `('RUN', [15000, 1, 75])`, `RUN: 15000, 1, 75` or `RUN 15000 1 75`.
    pub fn parse_line(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let caps = LINE_RE
            .captures(trimmed)
            .ok_or_else(|| StrideError::MalformedPackage {
                line: trimmed.to_string(),
            })?;

        let values = caps
            .name("list")
            .or_else(|| caps.name("bare"))
            .map(|m| m.as_str())
            .unwrap_or_default();

        let data = values
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<f64>().map_err(|_| StrideError::InvalidNumber {
                    value: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(&caps["code"], data))
    }

    /// One package per line. Blank lines and `#` comments are skipped.
    pub fn parse_lines(text: &str) -> Result<Vec<Self>> {
        text.lines()
            .enumerate()
            .filter(|(_, l)| {
                let l = l.trim();
                !l.is_empty() && !l.starts_with('#')
            })
            .map(|(idx, l)| Self::parse_line(l).map_err(|e| e.at_line(idx + 1)))
            .collect()
    }

    /// A JSON array of `{"workout_type", "data"}` objects or `[code, [values]]` pairs.
    pub fn from_json(text: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Summarise each package in order. A failure only affects its own entry.
pub fn process_packages(packages: &[Package]) -> Vec<Result<InfoMessage>> {
    packages
        .iter()
        .map(|p| {
            let result = p.read().map(|t| t.show_training_info());
            if let Err(e) = &result {
                warn!("package {} rejected: {}", p.workout_type, e);
            }
            result
        })
        .collect()
}
