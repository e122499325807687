// ABOUTME: Four-week training mission model with weekly goals and status lifecycle
// ABOUTME: Status transitions are active -> completed or active -> abandoned, never deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::Position;
use crate::constants::mission::{DAYS_PER_WEEK, DEFAULT_DURATION_WEEKS};
use crate::errors::{AppError, AppResult};

/// What the mission trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionType {
    /// Escaping or surviving a bad position
    #[serde(rename = "defense")]
    Defense,
    /// Building an offensive game from a position
    #[serde(rename = "a-game")]
    AGame,
}

/// Lifecycle state of a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    /// Currently being trained
    Active,
    /// Finished all four weeks
    Completed,
    /// Stopped early by the user
    Abandoned,
}

/// Goal for one week of a mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    /// Week number, 1-4
    pub week_number: u8,
    /// What to work on this week
    pub description: String,
    /// Reference video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Title or timestamp hint for the reference video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_timestamp: Option<String>,
}

impl WeeklyGoal {
    /// Create a goal without video metadata
    pub fn new(week_number: u8, description: impl Into<String>) -> Self {
        Self {
            week_number,
            description: description.into(),
            video_url: None,
            video_timestamp: None,
        }
    }

    /// Attach reference video metadata
    #[must_use]
    pub fn with_video(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self.video_timestamp = Some(title.into());
        self
    }
}

/// A structured training goal focused on one position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Mission identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Defense or A-game
    pub mission_type: MissionType,
    /// Focal position
    pub position_focus: Position,
    /// Free-text goal
    pub goal_description: String,
    /// When week 1 begins
    pub start_date: DateTime<Utc>,
    /// Nominal end of week 4
    pub end_date: DateTime<Utc>,
    /// Lifecycle state
    pub status: MissionStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Goals ordered by week number
    #[serde(default)]
    pub weekly_goals: Vec<WeeklyGoal>,
}

impl Mission {
    /// Create an active mission spanning the default four weeks from `start_date`
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        mission_type: MissionType,
        position_focus: Position,
        goal_description: impl Into<String>,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            mission_type,
            position_focus,
            goal_description: goal_description.into(),
            start_date,
            end_date: start_date + Duration::days(i64::from(DEFAULT_DURATION_WEEKS) * DAYS_PER_WEEK),
            status: MissionStatus::Active,
            created_at: start_date,
            weekly_goals: Vec::new(),
        }
    }

    /// Replace the weekly goals
    #[must_use]
    pub fn with_weekly_goals(mut self, weekly_goals: Vec<WeeklyGoal>) -> Self {
        self.weekly_goals = weekly_goals;
        self
    }

    /// Goal for the given week, looked up by its week number
    #[must_use]
    pub fn weekly_goal(&self, week_number: u8) -> Option<&WeeklyGoal> {
        self.weekly_goals
            .iter()
            .find(|goal| goal.week_number == week_number)
    }

    /// Whether the mission is currently being trained
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == MissionStatus::Active
    }

    /// Mark an active mission as completed
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the mission is not active
    pub fn complete(&mut self) -> AppResult<()> {
        self.transition(MissionStatus::Completed)
    }

    /// Mark an active mission as abandoned
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the mission is not active
    pub fn abandon(&mut self) -> AppResult<()> {
        self.transition(MissionStatus::Abandoned)
    }

    fn transition(&mut self, next: MissionStatus) -> AppResult<()> {
        if self.status != MissionStatus::Active {
            return Err(AppError::invalid_input(format!(
                "Mission {} is {:?} and cannot become {next:?}",
                self.id, self.status
            ))
            .with_resource_id(self.id.clone()));
        }
        info!(mission_id = %self.id, from = ?self.status, to = ?next, "Mission status changed");
        self.status = next;
        Ok(())
    }
}
