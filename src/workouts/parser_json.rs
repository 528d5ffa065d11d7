//! JSON workout plan parser.
//!
//! Plan files hold a top-level `trainings` list; see [`TrainingPlan`].

use serde_json::error::Category;

use crate::workouts::types::{TrainingPlan, WorkoutParseError};

/// Parse a training plan from JSON text.
pub fn parse_plan(content: &str) -> Result<TrainingPlan, WorkoutParseError> {
    let plan: TrainingPlan = serde_json::from_str(content).map_err(|e| match e.classify() {
        Category::Data => WorkoutParseError::InvalidStructure(e.to_string()),
        Category::Io | Category::Syntax | Category::Eof => {
            WorkoutParseError::InvalidJson(e.to_string())
        }
    })?;

    tracing::debug!(workouts = plan.trainings.len(), "parsed training plan");

    Ok(plan)
}

/// Parse a training plan file from disk.
pub fn parse_plan_file(path: &std::path::Path) -> Result<TrainingPlan, WorkoutParseError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| WorkoutParseError::IoError(format!("{}: {}", path.display(), e)))?;

    tracing::info!("Loaded training plan from {}", path.display());

    parse_plan(&content)
}
