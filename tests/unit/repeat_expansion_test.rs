//! Unit tests for repeat block expansion.

use rustride_plan_sync::workouts::repeat::{expand_block, expand_repeats};
use rustride_plan_sync::workouts::types::{RawStep, WorkoutParseError};

fn step(duration: &str, zone: &str) -> RawStep {
    RawStep {
        duration: Some(duration.to_string()),
        zone: Some(zone.to_string()),
        ..Default::default()
    }
}

fn marker(text: &str) -> RawStep {
    RawStep {
        description: Some(text.to_string()),
        ..Default::default()
    }
}

fn zones(steps: &[rustride_plan_sync::Step]) -> Vec<&str> {
    steps.iter().map(|s| s.zone.as_str()).collect()
}

#[test]
fn test_block_takes_two_steps_after_marker() {
    let steps = vec![marker("3x"), step("1m", "A"), step("1m", "B"), step("1m", "C")];

    let block = expand_block(&steps, 0).unwrap();

    assert_eq!(zones(&block), vec!["A", "B", "A", "B", "A", "B"]);
}

#[test]
fn test_full_expansion_keeps_trailing_steps_once() {
    let steps = vec![marker("3x"), step("1m", "A"), step("1m", "B"), step("1m", "C")];

    let expanded = expand_repeats(&steps).unwrap();

    assert_eq!(zones(&expanded), vec!["A", "B", "A", "B", "A", "B", "C"]);
}

#[test]
fn test_markers_never_in_output() {
    let steps = vec![
        step("10m", "W"),
        marker("2x"),
        step("1m", "On"),
        step("1m", "Off"),
        marker("2x"),
        step("30s", "Sprint"),
        step("30s", "Float"),
        step("10m", "Cool"),
    ];

    let expanded = expand_repeats(&steps).unwrap();

    assert_eq!(expanded.len(), 1 + 4 + 4 + 1);
    assert!(expanded.iter().all(|s| s.description.is_none()));
}

#[test]
fn test_marker_with_whitespace() {
    let steps = vec![marker("  2 x "), step("1m", "A")];
    assert_eq!(zones(&expand_repeats(&steps).unwrap()), vec!["A", "A"]);
}

#[test]
fn test_non_integer_count_fails() {
    let steps = vec![marker("manyx"), step("1m", "A")];
    assert!(matches!(
        expand_repeats(&steps),
        Err(WorkoutParseError::InvalidValue { .. })
    ));
}

#[test]
fn test_step_without_zone_fails() {
    let steps = vec![RawStep {
        duration: Some("5m".to_string()),
        ..Default::default()
    }];
    assert!(matches!(
        expand_repeats(&steps),
        Err(WorkoutParseError::MissingField(_))
    ));
}

#[test]
fn test_note_without_duration_skipped() {
    let steps = vec![
        RawStep {
            description: Some("Stay relaxed".to_string()),
            ..Default::default()
        },
        step("5m", "Z1"),
    ];
    assert_eq!(zones(&expand_repeats(&steps).unwrap()), vec!["Z1"]);
}
