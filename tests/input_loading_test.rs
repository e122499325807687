// ABOUTME: Tests for JSON input loading of missions, logs, and reference tables
// ABOUTME: Uses temporary files to validate parsing, defaults, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::fs;
use std::path::Path;

use apex_gameplan::core::errors::ErrorCode;
use apex_gameplan::core::models::{BeltLevel, MissionType, Position};
use apex_gameplan::input::{
    load_drill_library, load_logs, load_mission, load_missions, load_objective_table,
};
use apex_gameplan::intelligence::{
    DrillLibrary, GamePlanConfig, GamePlanEngineTrait, GamePlanGenerator, MissionPlanner,
};
use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_mission_round_trips_through_a_file() {
    let dir = TempDir::new().unwrap();
    let mission = MissionPlanner::start_mission(
        "user-1",
        MissionType::Defense,
        Position::SideControl,
        None,
        Utc::now(),
    );
    let path = write(&dir, "mission.json", &serde_json::to_string(&mission).unwrap());

    let loaded = load_mission(&path).unwrap();
    assert_eq!(loaded, mission);

    let list = write(
        &dir,
        "missions.json",
        &serde_json::to_string(&vec![mission.clone()]).unwrap(),
    );
    assert_eq!(load_missions(&list).unwrap(), vec![mission]);
}

#[test]
fn test_mobile_export_mission_parses() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "mission.json",
        r#"{
            "id": "m-1",
            "userId": "user-1",
            "missionType": "a-game",
            "positionFocus": "closed_guard",
            "goalDescription": "Build closed guard",
            "startDate": "2025-03-01T00:00:00Z",
            "endDate": "2025-03-29T00:00:00Z",
            "status": "active",
            "createdAt": "2025-03-01T00:00:00Z",
            "weeklyGoals": [
                {"weekNumber": 1, "description": "Posture breaking fundamentals"}
            ]
        }"#,
    );
    let mission = load_mission(&path).unwrap();
    assert_eq!(mission.mission_type, MissionType::AGame);
    assert_eq!(mission.position_focus, Position::ClosedGuard);
    assert!(mission.weekly_goal(1).unwrap().video_url.is_none());
}

#[test]
fn test_missing_logs_path_means_no_logs() {
    assert!(load_logs(None).unwrap().is_empty());
}

#[test]
fn test_missing_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let err = load_logs(Some(missing.as_path())).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(
        err.context.resource_id.as_deref(),
        Some(missing.display().to_string().as_str())
    );
}

#[test]
fn test_malformed_json_is_an_invalid_format_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "logs.json", "[{\"id\": 1}]");
    let err = load_logs(Some(path.as_path())).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_tables_default_to_builtin() {
    let drills = load_drill_library(None).unwrap();
    assert_eq!(&drills, DrillLibrary::builtin());

    let objectives = load_objective_table(None::<&Path>).unwrap();
    assert_eq!(
        objectives.lookup(Position::Mount, 2),
        Some("Execute elbow escape to half guard")
    );

    let dir = TempDir::new().unwrap();
    let path = write(&dir, "objectives.json", "[]");
    assert!(load_objective_table(Some(path.as_path())).unwrap().is_empty());
}

#[test]
fn test_logs_with_more_successes_than_attempts_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "logs.json",
        r#"[{
            "id": "log-1",
            "userId": "user-1",
            "sessionDate": "2025-03-02T18:00:00Z",
            "escapeAttempts": 1,
            "successfulEscapes": 9,
            "escapeRate": 5.0,
            "createdAt": "2025-03-02T18:00:00Z"
        }]"#,
    );
    let err = load_logs(Some(path.as_path())).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_stored_escape_rate_is_rederived_from_counts() {
    let start = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
    let mission = MissionPlanner::start_mission(
        "user-1",
        MissionType::Defense,
        Position::SideControl,
        None,
        start,
    );
    let session = (start + Duration::days(1)).to_rfc3339();

    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "logs.json",
        &format!(
            r#"[{{
                "id": "log-1",
                "userId": "user-1",
                "missionId": "{id}",
                "sessionDate": "{session}",
                "escapeAttempts": 10,
                "successfulEscapes": 0,
                "escapeRate": 0.9,
                "createdAt": "{session}"
            }}]"#,
            id = mission.id,
        ),
    );

    let logs = load_logs(Some(path.as_path())).unwrap();
    assert_eq!(logs[0].escape_rate, 0.0);

    let plan = GamePlanGenerator::with_config(GamePlanConfig::default())
        .generate_at(&mission, &logs, BeltLevel::Blue, start + Duration::days(2))
        .unwrap();
    assert_eq!(
        plan.objectives[1].description,
        "Maintain frame position for 5+ seconds before attempting escape"
    );
}
