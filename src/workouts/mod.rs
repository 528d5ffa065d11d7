//! Workout plan module: plan file model, duration parsing and repeat expansion.

pub mod duration;
pub mod parser_json;
pub mod repeat;
pub mod types;

pub use duration::{parse_duration, sum_step_lengths};
pub use parser_json::{parse_plan, parse_plan_file};
pub use repeat::{expand_block, expand_repeats};
pub use types::{Cadence, RawStep, Step, StepLength, TrainingPlan, Workout, WorkoutParseError};
