//! RustRide Plan Sync
//!
//! Converts a locally authored workout plan into Intervals.icu calendar
//! events and uploads them through the bulk events API. Provides duration
//! parsing, repeat block expansion, event formatting and the upload client.

pub mod cli;
pub mod error;
pub mod integrations;
pub mod pipeline;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use error::{ErrorKind, RunError};
pub use integrations::sync::{FormattedEvent, IntervalsClient};
pub use pipeline::{prepare_events, sync_plan};
pub use storage::config::AppConfig;
pub use workouts::types::{Step, TrainingPlan, Workout};
