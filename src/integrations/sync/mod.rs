//! Fitness Platform Sync
//!
//! Formats workout plans as calendar events and uploads them to
//! Intervals.icu.

pub mod events;
pub mod intervals;

use thiserror::Error;

// Re-export main types
pub use events::{format_plan, format_workout, ActivityType, EventCategory, FormattedEvent};
pub use intervals::IntervalsClient;

/// Sync-related errors
#[derive(Debug, Error)]
pub enum SyncError {
    /// Request could not be sent or its response not read
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Service answered with anything other than HTTP 200
    #[error("Service returned status {status}: {body}")]
    ServiceError { status: u16, body: String },
}

/// Acknowledgement of a bulk upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadReceipt {
    /// HTTP status returned by the service
    pub status: u16,
    /// Number of events sent in the request
    pub event_count: usize,
}

/// Trait for uploading formatted events to a platform
pub trait EventUploader: Send + Sync {
    /// Upload all events in a single request
    fn upload(
        &self,
        events: &[FormattedEvent],
    ) -> impl std::future::Future<Output = Result<UploadReceipt, SyncError>> + Send;
}
