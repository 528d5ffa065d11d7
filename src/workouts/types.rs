//! Workout plan types and enums.
//!
//! A plan file is deserialized into [`TrainingPlan`] / [`Workout`] /
//! [`RawStep`]. Repeat expansion turns raw steps into genuine [`Step`]s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Top-level plan document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Workouts in file order
    pub trainings: Vec<Workout>,
}

/// A named, dated collection of ordered steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Calendar date the workout is scheduled for
    pub date: NaiveDate,
    /// Free text name, also used to infer the activity type
    pub name: String,
    /// Ordered steps, possibly interleaved with repeat markers
    pub steps: Vec<RawStep>,
}

/// Cadence annotation, kept exactly as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cadence {
    /// Numeric cadence such as `90`
    Number(Number),
    /// Free text such as `"85-95 rpm"`
    Text(String),
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cadence::Number(n) => write!(f, "{}", n),
            Cadence::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A step as it appears in the plan file.
///
/// Either a genuine exercise segment or a repeat marker pseudo-step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<Cadence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Any other keys, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawStep {
    /// Repeat count text if this step is a repeat marker.
    ///
    /// A marker's trimmed description ends with a literal `x`; the text in
    /// front of it is returned unparsed.
    pub fn repeat_marker(&self) -> Option<&str> {
        let description = self.description.as_deref()?.trim();
        description.strip_suffix('x').map(str::trim)
    }
}

/// A genuine step: always has a duration token and a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Raw duration token, e.g. `"10m"`, `"30s"`, `"5km"`
    pub duration: String,
    /// Intensity zone label, e.g. `"Z2"`
    pub zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<Cadence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Step {
    /// Create a step with just a duration and a zone.
    pub fn new(duration: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            zone: zone.into(),
            cadence: None,
            description: None,
            extra: Map::new(),
        }
    }

    /// Attach a cadence annotation.
    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = Some(cadence);
        self
    }
}

impl TryFrom<RawStep> for Step {
    type Error = WorkoutParseError;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        let duration = raw
            .duration
            .ok_or_else(|| WorkoutParseError::MissingField("duration".to_string()))?;
        let zone = raw
            .zone
            .ok_or_else(|| WorkoutParseError::MissingField("zone".to_string()))?;

        Ok(Step {
            duration,
            zone,
            cadence: raw.cadence,
            description: raw.description,
            extra: raw.extra,
        })
    }
}

impl From<Step> for RawStep {
    fn from(step: Step) -> Self {
        RawStep {
            duration: Some(step.duration),
            zone: Some(step.zone),
            cadence: step.cadence,
            description: step.description,
            extra: step.extra,
        }
    }
}

/// Length of one step after parsing its duration token.
///
/// Distance steps carry meters, everything else carries seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepLength {
    Seconds(u64),
    Meters(f64),
}

impl StepLength {
    /// Raw numeric value regardless of unit.
    pub fn value(&self) -> f64 {
        match self {
            StepLength::Seconds(s) => *s as f64,
            StepLength::Meters(m) => *m,
        }
    }

    pub fn is_distance(&self) -> bool {
        matches!(self, StepLength::Meters(_))
    }
}

/// Errors while reading or interpreting a plan file.
#[derive(Debug, Error)]
pub enum WorkoutParseError {
    /// Plan file could not be read
    #[error("IO error: {0}")]
    IoError(String),

    /// Plan file is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// JSON is well formed but does not have the expected shape
    #[error("Unexpected plan structure: {0}")]
    InvalidStructure(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid field value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl WorkoutParseError {
    /// True when the file itself could not be read or decoded, as opposed
    /// to a well-formed document with bad contents.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            WorkoutParseError::IoError(_) | WorkoutParseError::InvalidJson(_)
        )
    }

    pub(crate) fn invalid(field: &str, value: &str) -> Self {
        WorkoutParseError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
