//! Unit tests for Intervals.icu event formatting.

use chrono::NaiveDate;
use rustride_plan_sync::integrations::sync::events::{
    describe_step, format_plan, format_workout, ActivityType,
};
use rustride_plan_sync::workouts::parser_json::parse_plan;
use rustride_plan_sync::workouts::types::{Cadence, RawStep, Step, Workout};

fn workout(name: &str, steps: Vec<RawStep>) -> Workout {
    Workout {
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        name: name.to_string(),
        steps,
    }
}

#[test]
fn test_type_from_name() {
    let cases = [
        ("Morning Bike Ride", ActivityType::Ride),
        ("Evening Run", ActivityType::Run),
        ("Pool Swim", ActivityType::Swim),
        ("Core Strength", ActivityType::Swim),
    ];

    for (name, expected) in cases {
        let event = format_workout(&workout(name, vec![])).unwrap();
        assert_eq!(event.activity_type, expected, "{}", name);
    }
}

#[test]
fn test_easy_run_event() {
    let plan = parse_plan(
        r#"{"trainings":[{"date":"2024-05-01","name":"Easy Run","steps":[{"duration":"10m","zone":"Z2"}]}]}"#,
    )
    .unwrap();

    let events = format_plan(&plan).unwrap();
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.start_date_local, "2024-05-01T00:00:00");
    assert_eq!(event.activity_type, ActivityType::Run);
    assert_eq!(event.moving_time, 600.0);
    assert_eq!(event.description, "- 10m in Z2");

    let json = serde_json::to_value(event).unwrap();
    assert_eq!(json["moving_time"], 600);
    assert_eq!(json["category"], "WORKOUT");
}

#[test]
fn test_describe_step_with_numeric_cadence() {
    let step = Step::new("5m", "Z3").with_cadence(Cadence::Number(90.into()));
    assert_eq!(describe_step(&step), "- 5m in Z3 (90)");
}

#[test]
fn test_description_follows_expansion() {
    let marker = RawStep {
        description: Some("2x".to_string()),
        ..Default::default()
    };
    let w = workout(
        "Run Intervals",
        vec![marker, Step::new("1m", "Z5").into(), Step::new("2m", "Z1").into()],
    );

    let event = format_workout(&w).unwrap();

    assert_eq!(
        event.description,
        "- 1m in Z5\n- 2m in Z1\n- 1m in Z5\n- 2m in Z1"
    );
    assert_eq!(event.moving_time, 360.0);
    assert_eq!(event.steps.len(), 4);
}

#[test]
fn test_distance_steps_summed_as_meters() {
    let w = workout(
        "Long Run",
        vec![Step::new("10m", "Z1").into(), Step::new("5km", "Z2").into()],
    );
    assert_eq!(format_workout(&w).unwrap().moving_time, 600.0 + 5000.0);
}
