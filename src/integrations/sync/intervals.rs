//! Intervals.icu API client.
//!
//! Bulk-creates calendar events for one athlete. Authentication is HTTP
//! Basic with the literal user name `API_KEY` and the athlete's API key as
//! password.

use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};

use super::events::FormattedEvent;
use super::{EventUploader, SyncError, UploadReceipt};
use crate::storage::config::IntervalsSettings;

/// User name Intervals.icu expects for API key authentication.
pub const API_KEY_USER: &str = "API_KEY";

/// Build the `Authorization` header value for an API key.
pub fn basic_auth_header(api_key: &str) -> String {
    let token = general_purpose::STANDARD.encode(format!("{}:{}", API_KEY_USER, api_key));
    format!("Basic {}", token)
}

/// Intervals.icu API client
pub struct IntervalsClient {
    /// HTTP client
    http: reqwest::Client,
    /// API base URL, up to and including `/athlete`
    base_url: String,
    /// Athlete the events are created for
    athlete_id: String,
    /// Precomputed `Authorization` header value
    auth_header: String,
}

impl IntervalsClient {
    /// Create a client from configuration.
    ///
    /// The credential is encoded once here and reused for every request.
    pub fn new(settings: &IntervalsSettings) -> Result<Self, SyncError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder
            .build()
            .map_err(|e| SyncError::NetworkError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            athlete_id: settings.athlete_id.clone(),
            auth_header: basic_auth_header(&settings.api_key),
        })
    }

    /// Bulk events endpoint for the configured athlete.
    pub fn events_url(&self) -> String {
        format!("{}/{}/events/bulk", self.base_url, self.athlete_id)
    }

    /// Upload all events in one request.
    ///
    /// Only HTTP 200 counts as success; the response body is not inspected.
    pub async fn upload_events(&self, events: &[FormattedEvent]) -> Result<UploadReceipt, SyncError> {
        let url = self.events_url();

        tracing::info!("Uploading {} events to {}", events.len(), url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .json(events)
            .send()
            .await
            .map_err(|e| SyncError::NetworkError(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::OK {
            tracing::debug!("Bulk upload accepted");
            return Ok(UploadReceipt {
                status: status.as_u16(),
                event_count: events.len(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SyncError::NetworkError(e.to_string()))?;

        tracing::warn!(status = status.as_u16(), "Bulk upload rejected");

        Err(SyncError::ServiceError {
            status: status.as_u16(),
            body,
        })
    }
}

impl EventUploader for IntervalsClient {
    async fn upload(&self, events: &[FormattedEvent]) -> Result<UploadReceipt, SyncError> {
        self.upload_events(events).await
    }
}
