//! Top-level run errors.
//!
//! Every failure a run can end with maps to one [`ErrorKind`], so callers
//! and tests can branch on the kind instead of the message text.

use thiserror::Error;

use crate::integrations::sync::SyncError;
use crate::storage::config::ConfigError;
use crate::workouts::types::WorkoutParseError;

/// Coarse failure category of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Plan file missing, unreadable, or not JSON
    Parse,
    /// Plan is JSON but its contents are malformed
    DataShape,
    /// Request could not reach the service
    Network,
    /// Service rejected the upload
    Service,
    /// Configuration unreadable or incomplete
    Config,
}

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read training plan: {0}")]
    Plan(#[from] WorkoutParseError),

    #[error("Failed to upload trainings: {0}")]
    Sync(#[from] SyncError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RunError {
    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RunError::Plan(e) if e.is_syntax() => ErrorKind::Parse,
            RunError::Plan(_) => ErrorKind::DataShape,
            RunError::Sync(SyncError::NetworkError(_)) => ErrorKind::Network,
            RunError::Sync(SyncError::ServiceError { .. }) => ErrorKind::Service,
            RunError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type RunResult<T> = Result<T, RunError>;
