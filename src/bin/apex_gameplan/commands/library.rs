// ABOUTME: Drill library listing and mission creation commands
// ABOUTME: Read-only views over the built-in tables plus templated mission output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use apex_gameplan::core::models::{MissionType, Position, SkillLevel};
use apex_gameplan::intelligence::{DrillLibrary, MissionPlanner};
use chrono::Utc;

use crate::helpers::output::print_json;

/// Print drills for a position, optionally narrowed to a `(week, skill)` slot
pub fn drills(position: Position, slot: Option<(u8, SkillLevel)>) -> Result<()> {
    let library = DrillLibrary::builtin();
    match slot {
        Some((week, skill)) => print_json(&library.drills_for(position, week, skill)),
        None => print_json(&library.all_for_position(position)),
    }
}

/// Print a freshly started mission
pub fn mission(
    position: Position,
    user_id: &str,
    goal: Option<&str>,
    mission_type: MissionType,
) -> Result<()> {
    let mission = MissionPlanner::start_mission(user_id, mission_type, position, goal, Utc::now());
    print_json(&mission)
}
