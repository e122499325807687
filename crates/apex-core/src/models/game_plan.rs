// ABOUTME: Generated session game plan: objectives, drills, mental cue, and rolling strategy
// ABOUTME: Transient output of the plan generator, serializable for persistence by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority of an objective within a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectivePriority {
    /// The single main objective of the session
    Primary,
    /// Supporting objectives
    Secondary,
}

/// A specific, measurable goal for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePlanObjective {
    /// Objective identifier, unique within its plan
    pub id: String,
    /// Imperative target, e.g. "Establish inside elbow position within 3 seconds"
    pub description: String,
    /// Whether the objective can be counted during a session
    pub measurable: bool,
    /// Repetitions to aim for
    pub target_reps: u32,
    /// Primary or secondary
    pub priority: ObjectivePriority,
}

/// A drill picked from the drill library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillRecommendation {
    /// Drill identifier
    pub id: String,
    /// Drill name
    pub name: String,
    /// Duration in seconds
    pub duration: u32,
    /// Whether a training partner is needed
    pub partner_required: bool,
    /// Reference video clip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_clip_url: Option<String>,
    /// Ordered steps
    pub instructions: Vec<String>,
    /// Ordered focus bullets
    pub focus_points: Vec<String>,
}

/// How to conduct live rounds to practice the mission focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingStrategy {
    /// Position to request at the start of each round, e.g. "Bottom side control"
    pub starting_position: String,
    /// Attempts to aim for, copied from the primary objective
    pub goal_reps: u32,
    /// Short imperative notes
    pub tactical_notes: Vec<String>,
    /// Reflective question for the rest between rounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub between_rounds_tip: Option<String>,
}

/// Personalized plan for today's session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGamePlan {
    /// Plan identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Mission the plan was generated for
    pub mission_id: String,
    /// Mission week, 1-4
    pub week_number: u8,
    /// Generation timestamp
    pub generated_date: DateTime<Utc>,
    /// Exactly three objectives, the first one primary
    pub objectives: Vec<GamePlanObjective>,
    /// Up to three drills
    pub drill_recommendations: Vec<DrillRecommendation>,
    /// Short phrase to recall while rolling
    pub mental_cue: String,
    /// Live-round guidance
    pub rolling_strategy: RollingStrategy,
    /// What to fall back on when the plan is not working
    pub fallback_plan: String,
}

impl SessionGamePlan {
    /// The primary objective of the plan
    #[must_use]
    pub fn primary_objective(&self) -> Option<&GamePlanObjective> {
        self.objectives
            .iter()
            .find(|objective| objective.priority == ObjectivePriority::Primary)
    }

    /// Total drilling time in seconds
    #[must_use]
    pub fn total_drill_seconds(&self) -> u32 {
        self.drill_recommendations
            .iter()
            .map(|drill| drill.duration)
            .sum()
    }
}
