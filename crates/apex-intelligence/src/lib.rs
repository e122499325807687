// ABOUTME: Game plan intelligence crate for the Apex BJJ training engine
// ABOUTME: Reference tables, training log analysis, mission planning, and plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Apex Intelligence
//!
//! Rules engine that turns a mission, recent training logs, and a belt rank
//! into a [`SessionGamePlan`](apex_core::models::SessionGamePlan).
//!
//! ## Modules
//!
//! - **config**: Tunable thresholds and limits with environment overrides
//! - **drill_library** / **objective_table**: Read-only reference data
//! - **training_analysis**: Recency windows, recurring problems, weekly progress
//! - **mission_planner**: Mission creation and active-mission selection
//! - **game_plan_generator**: The generator itself

/// Engine configuration
pub mod config;

/// Game plan error types
pub mod errors;

/// Keyword-matched mental cues and per-week fallback text
pub mod coaching_cues;

/// Drill templates keyed by position, week, and skill level
pub mod drill_library;

/// Primary objective text keyed by position and week
pub mod objective_table;

/// Aggregations over training logs
pub mod training_analysis;

/// Mission creation and selection
pub mod mission_planner;

/// Session game plan generation
pub mod game_plan_generator;

pub use config::{ConfigError, GamePlanConfig};
pub use drill_library::{DrillLibrary, DrillTemplate};
pub use errors::GamePlanError;
pub use game_plan_generator::{current_week, GamePlanEngineTrait, GamePlanGenerator};
pub use mission_planner::{weekly_goal_templates, MissionPlanner};
pub use objective_table::ObjectiveTable;
pub use training_analysis::{
    average_escape_rate, most_recent_logs, recurring_problems, WeeklyProgress,
};
