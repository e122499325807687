// ABOUTME: Tests for core training models: belts, positions, missions, and training logs
// ABOUTME: Validates parsing, derived values, invariants, and camelCase JSON shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::too_many_lines)]

use apex_core::errors::ErrorCode;
use apex_core::models::{
    escape_rate, BeltLevel, Mission, MissionStatus, MissionType, Position, SkillLevel,
    TrainingLog, WeeklyGoal,
};
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

#[test]
fn test_belt_collapses_to_skill_buckets() {
    assert_eq!(BeltLevel::White.skill_level(), SkillLevel::Beginner);
    assert_eq!(BeltLevel::Blue.skill_level(), SkillLevel::Intermediate);
    assert_eq!(BeltLevel::Purple.skill_level(), SkillLevel::Intermediate);
    assert_eq!(BeltLevel::Brown.skill_level(), SkillLevel::Advanced);
    assert_eq!(BeltLevel::Black.skill_level(), SkillLevel::Advanced);
}

#[test]
fn test_belt_and_skill_parsing() {
    assert_eq!("Purple".parse::<BeltLevel>().unwrap(), BeltLevel::Purple);
    assert_eq!(
        "advanced".parse::<SkillLevel>().unwrap(),
        SkillLevel::Advanced
    );

    let err = "red".parse::<BeltLevel>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_position_names() {
    assert_eq!(Position::SideControl.display_name(), "side control");
    assert_eq!(Position::ClosedGuard.capitalized_name(), "Closed guard");
    assert_eq!(Position::Back.capitalized_name(), "Back");
    assert_eq!("half guard".parse::<Position>().unwrap(), Position::HalfGuard);
    assert_eq!("open-guard".parse::<Position>().unwrap(), Position::OpenGuard);
    assert!("turtle".parse::<Position>().is_err());

    let defensive: Vec<_> = Position::ALL
        .into_iter()
        .filter(|p| p.is_defensive())
        .collect();
    assert_eq!(
        defensive,
        vec![Position::SideControl, Position::Mount, Position::Back]
    );
}

#[test]
fn test_escape_rate_derivation() {
    assert_eq!(escape_rate(0, 0), 0.0);
    assert_eq!(escape_rate(4, 1), 0.25);

    let date = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
    let log = TrainingLog::new("log-1", "user-1", date, 8, 6).unwrap();
    assert_eq!(log.escape_rate, 0.75);
    assert_eq!(log.created_at, date);
}

#[test]
fn test_training_log_rejects_invalid_counts() {
    let date = Utc::now();
    let err = TrainingLog::new("log-1", "user-1", date, 2, 3).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = TrainingLog::new("log-1", "user-1", date, 101, 0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = TrainingLog::new("log-1", "user-1", date, 5, 1)
        .unwrap()
        .with_intensity(11)
        .unwrap_err();
    assert_eq!(err.context.resource_id.as_deref(), Some("log-1"));
}

#[test]
fn test_training_log_update_recomputes_rate() {
    let mut log = TrainingLog::new("log-1", "user-1", Utc::now(), 5, 1)
        .unwrap()
        .for_mission("mission-1");
    log.update_counts(10, 5).unwrap();
    assert_eq!(log.escape_rate, 0.5);

    assert!(log.update_counts(1, 2).is_err());
    // Failed edits leave the log untouched
    assert_eq!(log.escape_attempts, 10);
    assert!(log.belongs_to("mission-1"));
    assert!(!log.belongs_to("mission-2"));
}

#[test]
fn test_training_log_json_shape() {
    let date = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
    let log = TrainingLog::new("log-1", "user-1", date, 4, 2)
        .unwrap()
        .for_mission("mission-1")
        .with_problem("Frames collapse")
        .with_intensity(7)
        .unwrap();

    let value = serde_json::to_value(&log).unwrap();
    assert_eq!(value["missionId"], "mission-1");
    assert_eq!(value["escapeRate"], 0.5);
    assert_eq!(value["mainProblem"], "Frames collapse");
    assert_eq!(value["intensityLevel"], 7);
    assert!(value.get("trainingNotes").is_none());

    // Records exported by the mobile client omit optional fields entirely
    let parsed: TrainingLog = serde_json::from_value(json!({
        "id": "log-2",
        "userId": "user-1",
        "sessionDate": "2025-03-02T18:00:00Z",
        "escapeAttempts": 3,
        "successfulEscapes": 0,
        "escapeRate": 0.0,
        "createdAt": "2025-03-02T18:00:00Z"
    }))
    .unwrap();
    assert!(parsed.mission_id.is_none());
    assert!(parsed.objectives_achieved.is_empty());
}

#[test]
fn test_training_log_deserialization_enforces_invariants() {
    let record = |attempts: u32, successes: u32, rate: f64, intensity: u8| {
        json!({
            "id": "log-3",
            "userId": "user-1",
            "sessionDate": "2025-03-02T18:00:00Z",
            "escapeAttempts": attempts,
            "successfulEscapes": successes,
            "escapeRate": rate,
            "intensityLevel": intensity,
            "createdAt": "2025-03-02T18:00:00Z"
        })
    };

    let parsed: TrainingLog = serde_json::from_value(record(4, 1, 0.9, 5)).unwrap();
    assert_eq!(parsed.escape_rate, 0.25);
    assert_eq!(parsed.intensity_level, Some(5));

    assert!(serde_json::from_value::<TrainingLog>(record(1, 9, 5.0, 5)).is_err());
    assert!(serde_json::from_value::<TrainingLog>(record(101, 0, 0.0, 5)).is_err());
    assert!(serde_json::from_value::<TrainingLog>(record(4, 1, 0.25, 11)).is_err());
}

#[test]
fn test_mission_spans_four_weeks() {
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let mission = Mission::new(
        "mission-1",
        "user-1",
        MissionType::Defense,
        Position::Mount,
        "Escape mount 50% of the time",
        start,
    );
    assert_eq!(mission.end_date - mission.start_date, Duration::days(28));
    assert!(mission.is_active());
    assert!(mission.weekly_goals.is_empty());
}

#[test]
fn test_weekly_goal_lookup_by_week_number() {
    let mission = Mission::new(
        "mission-1",
        "user-1",
        MissionType::AGame,
        Position::ClosedGuard,
        "Build closed guard",
        Utc::now(),
    )
    .with_weekly_goals(vec![
        WeeklyGoal::new(2, "Second"),
        WeeklyGoal::new(1, "First").with_video("https://example.com/v", "Intro"),
    ]);

    assert_eq!(mission.weekly_goal(1).unwrap().description, "First");
    assert_eq!(mission.weekly_goal(2).unwrap().description, "Second");
    assert!(mission.weekly_goal(3).is_none());
    assert_eq!(
        mission.weekly_goal(1).unwrap().video_timestamp.as_deref(),
        Some("Intro")
    );
}

#[test]
fn test_mission_status_transitions() {
    let mut mission = Mission::new(
        "mission-1",
        "user-1",
        MissionType::Defense,
        Position::Back,
        "Escape back",
        Utc::now(),
    );
    mission.complete().unwrap();
    assert_eq!(mission.status, MissionStatus::Completed);

    let err = mission.abandon().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(mission.status, MissionStatus::Completed);

    let value = serde_json::to_value(&mission).unwrap();
    assert_eq!(value["status"], "completed");
    assert_eq!(value["missionType"], "defense");
    assert_eq!(value["positionFocus"], "back");
}
