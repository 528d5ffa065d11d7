//! External Integrations Module
//!
//! Provides the Intervals.icu calendar sync.

pub mod sync;

// Re-export main types for convenience
pub use sync::{EventUploader, FormattedEvent, IntervalsClient, SyncError, UploadReceipt};
