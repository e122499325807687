// ABOUTME: Core data models for missions, training logs, and generated game plans
// ABOUTME: Re-exports Mission, TrainingLog, SessionGamePlan and the rank/position enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Entities consumed and produced by the game plan engine. Relationships are
//! plain string-id references: a [`TrainingLog`] belongs to one user and
//! optionally one [`Mission`]; a mission owns its weekly goals outright.
//!
//! All models serialize with camelCase field names so records exported by the
//! mobile client deserialize unchanged.

mod belt;
mod game_plan;
mod mission;
mod position;
mod training_log;

pub use belt::{BeltLevel, SkillLevel};
pub use game_plan::{
    DrillRecommendation, GamePlanObjective, ObjectivePriority, RollingStrategy, SessionGamePlan,
};
pub use mission::{Mission, MissionStatus, MissionType, WeeklyGoal};
pub use position::Position;
pub use training_log::{
    escape_rate, AchievementStatus, GeneralTrainingType, ObjectiveAchievement, TrainingLog,
};
