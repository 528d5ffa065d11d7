//! Plan upload pipeline: load → expand → format → upload.

use std::path::Path;

use crate::error::RunResult;
use crate::integrations::sync::{format_plan, EventUploader, FormattedEvent, UploadReceipt};
use crate::workouts::parser_json::parse_plan_file;

/// Load a plan file and format every workout into an event.
///
/// Pure apart from the file read: the same file always yields the same
/// events.
pub fn prepare_events(path: &Path) -> RunResult<Vec<FormattedEvent>> {
    let plan = parse_plan_file(path)?;
    let events = format_plan(&plan)?;

    tracing::info!("Prepared {} events from {}", events.len(), path.display());

    Ok(events)
}

/// Run the whole pipeline against `uploader`.
///
/// Nothing is sent unless every workout in the file formats cleanly.
pub async fn sync_plan<U: EventUploader>(path: &Path, uploader: &U) -> RunResult<UploadReceipt> {
    let events = prepare_events(path)?;
    let receipt = uploader.upload(&events).await?;
    Ok(receipt)
}
