// ABOUTME: Game plan generation error types
// ABOUTME: Precondition failures on mission data, convertible into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use apex_core::errors::AppError;
use serde_json::json;
use thiserror::Error;

/// Errors raised while generating a game plan.
///
/// These signal malformed mission data upstream, not a user-facing failure;
/// retrying without fixing the mission record yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GamePlanError {
    /// The mission has no weekly goal for the computed current week
    #[error("Mission {mission_id} has no weekly goal for week {week}")]
    MissingWeeklyGoal {
        /// Mission being planned
        mission_id: String,
        /// Computed current week
        week: u8,
    },
}

impl From<GamePlanError> for AppError {
    fn from(error: GamePlanError) -> Self {
        match &error {
            GamePlanError::MissingWeeklyGoal { mission_id, week } => {
                Self::config(error.to_string())
                    .with_resource_id(mission_id.clone())
                    .with_details(json!({ "week": week }))
            }
        }
    }
}
