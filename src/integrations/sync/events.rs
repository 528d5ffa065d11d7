//! Intervals.icu event formatting.
//!
//! Turns a [`Workout`] into the calendar event shape the bulk events
//! endpoint accepts.

use serde::{Deserialize, Serialize, Serializer};

use crate::workouts::duration::sum_step_lengths;
use crate::workouts::repeat::expand_repeats;
use crate::workouts::types::{Step, TrainingPlan, Workout, WorkoutParseError};

/// Local time of day every event starts at.
pub const LOCAL_MIDNIGHT: &str = "T00:00:00";

/// Event category; planned workouts are the only kind produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventCategory {
    #[default]
    Workout,
}

/// Activity type shown on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Ride,
    Run,
    Swim,
}

impl ActivityType {
    /// Infer the activity type from a workout name.
    ///
    /// `Bike` wins over `Run`; anything else is a swim.
    pub fn from_name(name: &str) -> Self {
        if name.contains("Bike") {
            ActivityType::Ride
        } else if name.contains("Run") {
            ActivityType::Run
        } else {
            ActivityType::Swim
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::Ride => write!(f, "Ride"),
            ActivityType::Run => write!(f, "Run"),
            ActivityType::Swim => write!(f, "Swim"),
        }
    }
}

/// Upload-ready projection of one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedEvent {
    pub start_date_local: String,
    pub category: EventCategory,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Sum of step lengths; see [`sum_step_lengths`] for the unit caveat
    #[serde(serialize_with = "serialize_whole_number")]
    pub moving_time: f64,
    pub steps: Vec<Step>,
}

/// Whole values go out as JSON integers, fractional ones as decimals.
fn serialize_whole_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && *value >= 0.0 && *value <= u64::MAX as f64 {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// One description line for a step, e.g. `- 10m in Z2 (90)`.
pub fn describe_step(step: &Step) -> String {
    match &step.cadence {
        Some(cadence) => format!("- {} in {} ({})", step.duration, step.zone, cadence),
        None => format!("- {} in {}", step.duration, step.zone),
    }
}

/// Format a single workout into an event.
pub fn format_workout(workout: &Workout) -> Result<FormattedEvent, WorkoutParseError> {
    let steps = expand_repeats(&workout.steps)?;

    let description = steps
        .iter()
        .map(describe_step)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    let moving_time = sum_step_lengths(&steps)?;
    let activity_type = ActivityType::from_name(&workout.name);

    tracing::debug!(
        name = %workout.name,
        steps = steps.len(),
        %activity_type,
        moving_time,
        "formatted workout"
    );

    Ok(FormattedEvent {
        start_date_local: format!("{}{}", workout.date.format("%Y-%m-%d"), LOCAL_MIDNIGHT),
        category: EventCategory::Workout,
        name: workout.name.clone(),
        description,
        activity_type,
        moving_time,
        steps,
    })
}

/// Format every workout of a plan, in file order.
pub fn format_plan(plan: &TrainingPlan) -> Result<Vec<FormattedEvent>, WorkoutParseError> {
    plan.trainings.iter().map(format_workout).collect()
}
