// ABOUTME: Game plan generation and weekly review commands
// ABOUTME: Loads JSON inputs, runs the engine, and prints the result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use apex_gameplan::core::models::{BeltLevel, SessionGamePlan};
use apex_gameplan::input::{
    load_drill_library, load_logs, load_mission, load_objective_table,
};
use apex_gameplan::intelligence::{
    GamePlanConfig, GamePlanEngineTrait, GamePlanGenerator, MissionPlanner, WeeklyProgress,
};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::helpers::output::print_json;

/// Inputs for `generate`
pub struct GenerateArgs {
    pub mission: PathBuf,
    pub logs: Option<PathBuf>,
    pub belt: BeltLevel,
    pub now: DateTime<Utc>,
    pub drills: Option<PathBuf>,
    pub objectives: Option<PathBuf>,
}

pub fn generate(args: &GenerateArgs) -> Result<()> {
    print_json(&build_plan(args)?)
}

/// Load inputs and run the generator over the mission's own logs
pub fn build_plan(args: &GenerateArgs) -> Result<SessionGamePlan> {
    let config = GamePlanConfig::load().context("Invalid APEX_GAMEPLAN_* configuration")?;
    let mission = load_mission(&args.mission)?;
    let all_logs = load_logs(args.logs.as_deref())?;
    let logs = MissionPlanner::logs_for_mission(&all_logs, &mission.id);
    let drills = load_drill_library(args.drills.as_deref())?;
    let objectives = load_objective_table(args.objectives.as_deref())?;

    info!(
        mission_id = %mission.id,
        logs = logs.len(),
        ignored_logs = all_logs.len() - logs.len(),
        belt = %args.belt,
        "Generating game plan"
    );

    let generator = GamePlanGenerator::with_tables(config, &drills, &objectives);
    generator
        .generate_at(&mission, &logs, args.belt, args.now)
        .with_context(|| format!("Cannot generate a plan for mission {}", mission.id))
}

pub fn review(logs_path: &Path, mission_id: Option<&str>, now: DateTime<Utc>) -> Result<()> {
    let all_logs = load_logs(Some(logs_path))?;
    let logs = match mission_id {
        Some(id) => MissionPlanner::logs_for_mission(&all_logs, id),
        None => all_logs,
    };

    let progress = WeeklyProgress::compute(&logs, now);
    info!(
        this_week = progress.this_week_sessions,
        last_week = progress.last_week_sessions,
        improvement = progress.improvement,
        "Weekly review computed"
    );

    print_json(&progress)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use apex_gameplan::core::models::{MissionType, Position, TrainingLog};
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_build_plan_ignores_logs_from_other_missions() {
        let start = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
        let mission = MissionPlanner::start_mission(
            "user-1",
            MissionType::Defense,
            Position::Mount,
            None,
            start,
        );
        let session = start + Duration::days(1);
        let other = |id: &str| {
            TrainingLog::new(id, "user-1", session, 4, 0)
                .unwrap()
                .for_mission("another-mission")
                .with_problem("Too slow")
        };
        let logs = vec![
            other("o-1"),
            other("o-2"),
            TrainingLog::new("m-1", "user-1", session, 4, 4)
                .unwrap()
                .for_mission(mission.id.clone()),
        ];

        let dir = TempDir::new().unwrap();
        let mission_path = dir.path().join("mission.json");
        let logs_path = dir.path().join("logs.json");
        fs::write(&mission_path, serde_json::to_string(&mission).unwrap()).unwrap();
        fs::write(&logs_path, serde_json::to_string(&logs).unwrap()).unwrap();

        let plan = build_plan(&GenerateArgs {
            mission: mission_path,
            logs: Some(logs_path),
            belt: BeltLevel::Blue,
            now: start + Duration::days(2),
            drills: None,
            objectives: None,
        })
        .unwrap();

        assert_eq!(plan.mission_id, mission.id);
        // only the perfect session counts, so the high tier applies
        assert_eq!(
            plan.objectives[1].description,
            "Chain to a secondary position if first escape fails"
        );
        // the other mission's recurring problem is not picked up
        assert_eq!(
            plan.objectives[2].description,
            "Stay calm and breathe when stuck in mount"
        );
    }
}
