// ABOUTME: Rules-based generator producing a session game plan from mission, logs, and belt
// ABOUTME: Pure and deterministic for a fixed clock; the only failure is a missing weekly goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Game plan generator
//!
//! A plan is assembled in fixed steps:
//!
//! 1. The current mission week is derived from the start date and clamped to 1-4.
//! 2. Recurring problems are tallied over the few most recent logs.
//! 3. The average escape rate is taken over every supplied log.
//! 4. Three objectives are chosen: the primary from the objective table, one
//!    secondary by escape-rate tier, one secondary by the top recurring problem.
//! 5. Drills come from the drill library for the position, week, and skill bucket.
//! 6. Mental cue, rolling strategy, and fallback plan are canned text chosen by
//!    keyword, position, and week respectively.
//!
//! Identifiers are derived from the mission, week, and clock, so two calls with
//! the same inputs and the same `now` serialize identically.

use apex_core::constants::game_plan::MAX_DRILL_RECOMMENDATIONS;
use apex_core::constants::mission::{DAYS_PER_WEEK, FIRST_WEEK, LAST_WEEK};
use apex_core::models::{
    BeltLevel, DrillRecommendation, GamePlanObjective, Mission, ObjectivePriority, Position,
    RollingStrategy, SessionGamePlan, SkillLevel, TrainingLog,
};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::coaching_cues::{
    between_rounds_tip, fallback_plan_for, mental_cue_for, starting_position_label,
};
use crate::config::GamePlanConfig;
use crate::drill_library::DrillLibrary;
use crate::errors::GamePlanError;
use crate::objective_table::ObjectiveTable;
use crate::training_analysis::{average_escape_rate, recurring_problems};

/// Trait for producing session game plans
pub trait GamePlanEngineTrait {
    /// Generate a plan for the current moment
    ///
    /// # Errors
    ///
    /// Returns `GamePlanError::MissingWeeklyGoal` when the mission has no goal
    /// for the computed week
    fn generate(
        &self,
        mission: &Mission,
        recent_logs: &[TrainingLog],
        belt: BeltLevel,
    ) -> Result<SessionGamePlan, GamePlanError> {
        self.generate_at(mission, recent_logs, belt, Utc::now())
    }

    /// Generate a plan as of `now`
    ///
    /// # Errors
    ///
    /// Returns `GamePlanError::MissingWeeklyGoal` when the mission has no goal
    /// for the computed week
    fn generate_at(
        &self,
        mission: &Mission,
        recent_logs: &[TrainingLog],
        belt: BeltLevel,
        now: DateTime<Utc>,
    ) -> Result<SessionGamePlan, GamePlanError>;
}

/// Mission week for `now`: whole days since `start` divided into weeks,
/// 1-based and clamped to the mission length.
///
/// Dates before the start report week 1; dates past the end report the last week.
#[must_use]
pub fn current_week(start: DateTime<Utc>, now: DateTime<Utc>) -> u8 {
    let days = (now - start).num_milliseconds().div_euclid(86_400_000);
    let week = days.div_euclid(DAYS_PER_WEEK) + 1;
    week.clamp(i64::from(FIRST_WEEK), i64::from(LAST_WEEK)) as u8
}

/// Game plan generator over a pair of reference tables
#[derive(Debug, Clone)]
pub struct GamePlanGenerator<'a> {
    config: GamePlanConfig,
    drills: &'a DrillLibrary,
    objectives: &'a ObjectiveTable,
}

impl Default for GamePlanGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl GamePlanGenerator<'static> {
    /// Generator over the built-in tables and the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GamePlanConfig::global().clone(),
            drills: DrillLibrary::builtin(),
            objectives: ObjectiveTable::builtin(),
        }
    }

    /// Generator over the built-in tables with an explicit configuration
    #[must_use]
    pub fn with_config(config: GamePlanConfig) -> Self {
        Self {
            config,
            drills: DrillLibrary::builtin(),
            objectives: ObjectiveTable::builtin(),
        }
    }
}

impl<'a> GamePlanGenerator<'a> {
    /// Generator over caller-supplied tables
    #[must_use]
    pub const fn with_tables(
        config: GamePlanConfig,
        drills: &'a DrillLibrary,
        objectives: &'a ObjectiveTable,
    ) -> Self {
        Self {
            config,
            drills,
            objectives,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &GamePlanConfig {
        &self.config
    }

    fn build_objectives(
        &self,
        plan_id: &str,
        position: Position,
        week: u8,
        skill: SkillLevel,
        avg_rate: f64,
        recurring: &[String],
    ) -> [GamePlanObjective; 3] {
        let position_name = position.display_name();

        let primary_text = self.objectives.lookup(position, week).map_or_else(
            || format!("Work on {position_name} technique"),
            str::to_owned,
        );
        let primary = objective(
            format!("{plan_id}-obj-primary"),
            primary_text,
            self.config.targets.for_skill(skill),
            ObjectivePriority::Primary,
        );

        let thresholds = &self.config.thresholds;
        let (rate_text, rate_target) = if avg_rate < thresholds.low_rate {
            ("Maintain frame position for 5+ seconds before attempting escape", 3)
        } else if avg_rate >= thresholds.high_rate {
            ("Chain to a secondary position if first escape fails", 2)
        } else {
            ("Execute escape with proper hip movement and timing", 3)
        };
        let performance = objective(
            format!("{plan_id}-obj-secondary-1"),
            rate_text.to_owned(),
            rate_target,
            ObjectivePriority::Secondary,
        );

        let (problem_text, problem_target) = match recurring.first() {
            Some(problem) => {
                let problem = problem.to_lowercase();
                if problem.contains("frame") || problem.contains("elbow") {
                    (
                        format!("Establish frames immediately when entering {position_name}"),
                        4,
                    )
                } else if problem.contains("timing") || problem.contains("slow") {
                    ("React within 3 seconds of entering bad position".to_owned(), 3)
                } else {
                    ("Avoid giving up back during escape attempts".to_owned(), 5)
                }
            }
            None => (format!("Stay calm and breathe when stuck in {position_name}"), 5),
        };
        let problem = objective(
            format!("{plan_id}-obj-secondary-2"),
            problem_text,
            problem_target,
            ObjectivePriority::Secondary,
        );

        [primary, performance, problem]
    }

    fn select_drills(&self, position: Position, week: u8, skill: SkillLevel) -> Vec<DrillRecommendation> {
        self.drills
            .drills_for(position, week, skill)
            .into_iter()
            .take(self.config.limits.max_drills.min(MAX_DRILL_RECOMMENDATIONS))
            .cloned()
            .collect()
    }
}

impl GamePlanEngineTrait for GamePlanGenerator<'_> {
    fn generate_at(
        &self,
        mission: &Mission,
        recent_logs: &[TrainingLog],
        belt: BeltLevel,
        now: DateTime<Utc>,
    ) -> Result<SessionGamePlan, GamePlanError> {
        let week = current_week(mission.start_date, now);
        let weekly_goal =
            mission
                .weekly_goal(week)
                .ok_or_else(|| GamePlanError::MissingWeeklyGoal {
                    mission_id: mission.id.clone(),
                    week,
                })?;

        let position = mission.position_focus;
        let skill = belt.skill_level();
        let recurrence = &self.config.recurrence;
        let recurring =
            recurring_problems(recent_logs, recurrence.window_size, recurrence.min_occurrences);
        let avg_rate = average_escape_rate(recent_logs);

        debug!(
            mission_id = %mission.id,
            week,
            weekly_goal = %weekly_goal.description,
            skill = %skill,
            avg_rate,
            recurring = recurring.len(),
            "Generating session game plan"
        );

        let plan_id = format!("gameplan-{}-w{week}-{}", mission.id, now.timestamp_millis());
        let objectives =
            self.build_objectives(&plan_id, position, week, skill, avg_rate, &recurring);
        let drill_recommendations = self.select_drills(position, week, skill);

        let [primary, ..] = &objectives;
        let mental_cue = mental_cue_for(&primary.description).to_owned();
        let rolling_strategy =
            rolling_strategy(position, &primary.description, primary.target_reps);

        Ok(SessionGamePlan {
            id: plan_id,
            user_id: mission.user_id.clone(),
            mission_id: mission.id.clone(),
            week_number: week,
            generated_date: now,
            objectives: Vec::from(objectives),
            drill_recommendations,
            mental_cue,
            rolling_strategy,
            fallback_plan: fallback_plan_for(week).to_owned(),
        })
    }
}

fn objective(
    id: String,
    description: String,
    target_reps: u32,
    priority: ObjectivePriority,
) -> GamePlanObjective {
    GamePlanObjective {
        id,
        description,
        measurable: true,
        target_reps,
        priority,
    }
}

fn rolling_strategy(position: Position, primary_text: &str, goal_reps: u32) -> RollingStrategy {
    let starting_position = starting_position_label(position);
    let reset_note = if position.is_defensive() {
        "Give position back after successful escape to practice again"
    } else {
        "Reset to position after each attempt"
    };

    let tactical_notes = vec![
        format!(
            "Ask training partners to start from {}",
            starting_position.to_lowercase()
        ),
        format!("Focus on: {}", primary_text.to_lowercase()),
        reset_note.to_owned(),
        "Count your attempts, not just successes".to_owned(),
        "Ask higher belts for specific feedback on technique".to_owned(),
    ];

    RollingStrategy {
        starting_position,
        goal_reps,
        tactical_notes,
        between_rounds_tip: Some(between_rounds_tip(position).to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_current_week_uses_whole_days() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        // 6 days 23 hours is still day 6
        assert_eq!(current_week(start, start + Duration::hours(7 * 24 - 1)), 1);
        assert_eq!(current_week(start, start + Duration::days(7)), 2);
        assert_eq!(current_week(start, start - Duration::days(30)), 1);
        assert_eq!(current_week(start, start + Duration::days(365)), 4);
    }

    #[test]
    fn test_rolling_strategy_offensive_position() {
        let strategy = rolling_strategy(Position::ClosedGuard, "Break Posture", 4);
        assert_eq!(strategy.starting_position, "Closed guard");
        assert_eq!(
            strategy.tactical_notes[0],
            "Ask training partners to start from closed guard"
        );
        assert_eq!(strategy.tactical_notes[1], "Focus on: break posture");
        assert_eq!(strategy.tactical_notes[2], "Reset to position after each attempt");
        assert_eq!(strategy.goal_reps, 4);
    }
}
