//! Integration tests for the load → format → upload pipeline.

use std::path::{Path, PathBuf};

use anyhow::Result;
use rustride_plan_sync::integrations::sync::{ActivityType, IntervalsClient};
use rustride_plan_sync::storage::config::IntervalsSettings;
use rustride_plan_sync::{prepare_events, sync_plan, ErrorKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/trainings.json")
}

#[test]
fn test_fixture_plan_formats() -> Result<()> {
    let events = prepare_events(&fixture())?;
    assert_eq!(events.len(), 3);

    let run = &events[0];
    assert_eq!(run.activity_type, ActivityType::Run);
    assert_eq!(run.moving_time, 600.0);

    let bike = &events[1];
    assert_eq!(bike.activity_type, ActivityType::Ride);
    assert_eq!(bike.start_date_local, "2024-05-03T00:00:00");
    // warmup + 4 x (on, off) + cooldown
    assert_eq!(bike.steps.len(), 10);
    assert_eq!(bike.moving_time, 900.0 + 4.0 * 360.0 + 600.0);
    assert!(bike.description.starts_with("- 15m in Z1 (90)\n- 3m in Z5 (100-105rpm)\n- 3m in Z1"));
    assert!(bike.description.ends_with("- 10m in Z1"));

    let swim = &events[2];
    assert_eq!(swim.activity_type, ActivityType::Swim);
    assert_eq!(swim.steps.len(), 13);
    assert_eq!(swim.moving_time, 400.0 + 6.0 * (100.0 + 20.0));

    Ok(())
}

#[test]
fn test_formatting_is_idempotent() -> Result<()> {
    let first = serde_json::to_string(&prepare_events(&fixture())?)?;
    let second = serde_json::to_string(&prepare_events(&fixture())?)?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_malformed_plan_never_reaches_service() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir()?;
    let plan = dir.path().join("trainings.json");
    std::fs::write(&plan, "{\"trainings\": [ {\"date\": ")?;

    let client = IntervalsClient::new(&IntervalsSettings {
        athlete_id: "i1".to_string(),
        api_key: "k".to_string(),
        base_url: server.uri(),
        ..Default::default()
    })?;

    let err = sync_plan(&plan, &client).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);

    Ok(())
}

#[tokio::test]
async fn test_fixture_uploads_in_one_request() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/i1/events/bulk"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = IntervalsClient::new(&IntervalsSettings {
        athlete_id: "i1".to_string(),
        api_key: "k".to_string(),
        base_url: server.uri(),
        ..Default::default()
    })?;

    let receipt = sync_plan(&fixture(), &client).await?;
    assert_eq!(receipt.event_count, 3);

    Ok(())
}

#[tokio::test]
async fn test_service_rejection_kind() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = IntervalsClient::new(&IntervalsSettings {
        athlete_id: "i1".to_string(),
        api_key: "k".to_string(),
        base_url: server.uri(),
        ..Default::default()
    })?;

    let err = sync_plan(&fixture(), &client).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Service);

    Ok(())
}
