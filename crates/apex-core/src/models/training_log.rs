// ABOUTME: Logged training session with escape attempts, derived escape rate, and notes
// ABOUTME: Validates attempt counts and intensity at construction time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::training_log::{
    MAX_ESCAPE_ATTEMPTS, MAX_INTENSITY_LEVEL, MIN_INTENSITY_LEVEL,
};
use crate::errors::{AppError, AppResult};

/// Kind of unstructured session logged outside a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneralTrainingType {
    /// Live sparring
    Rolling,
    /// Repetition drilling
    Drilling,
    /// Technique class
    Technique,
    /// Open mat
    OpenMat,
}

/// Self-reported result for one game plan objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementStatus {
    /// Target met
    Yes,
    /// Some reps landed
    Partial,
    /// Not achieved
    No,
}

/// Tracked outcome of a game plan objective during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveAchievement {
    /// Objective the outcome refers to
    pub objective_id: String,
    /// Objective description at the time of the session
    pub objective_text: String,
    /// Target repetitions of the objective
    pub target_reps: u32,
    /// Outcome
    pub achieved: AchievementStatus,
    /// Reps actually performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_reps: Option<u32>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One logged training session
///
/// Deserialization runs the same checks as [`TrainingLog::new`] and derives
/// `escape_rate` from the counts; a stored rate is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TrainingLogRecord")]
pub struct TrainingLog {
    /// Log identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Mission this session trained, absent for general sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_id: Option<String>,
    /// When the session happened
    pub session_date: DateTime<Utc>,
    /// Escape attempts for the tracked skill
    pub escape_attempts: u32,
    /// Successful escapes, never more than attempts
    pub successful_escapes: u32,
    /// successes / attempts, 0 when there were no attempts
    pub escape_rate: f64,
    /// Main problem encountered, compared by exact string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_problem: Option<String>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_notes: Option<String>,
    /// Session intensity on a 1-10 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_level: Option<u8>,
    /// Kind of session when not tied to a mission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_training_type: Option<GeneralTrainingType>,
    /// Objective outcomes tracked against a game plan
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objectives_achieved: Vec<ObjectiveAchievement>,
    /// Game plan the session followed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_plan_id: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Wire shape of a training log before validation
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrainingLogRecord {
    id: String,
    user_id: String,
    #[serde(default)]
    mission_id: Option<String>,
    session_date: DateTime<Utc>,
    escape_attempts: u32,
    successful_escapes: u32,
    #[serde(default)]
    main_problem: Option<String>,
    #[serde(default)]
    training_notes: Option<String>,
    #[serde(default)]
    intensity_level: Option<u8>,
    #[serde(default)]
    general_training_type: Option<GeneralTrainingType>,
    #[serde(default)]
    objectives_achieved: Vec<ObjectiveAchievement>,
    #[serde(default)]
    game_plan_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<TrainingLogRecord> for TrainingLog {
    type Error = AppError;

    fn try_from(record: TrainingLogRecord) -> AppResult<Self> {
        let mut log = Self::new(
            record.id.clone(),
            record.user_id,
            record.session_date,
            record.escape_attempts,
            record.successful_escapes,
        )
        .map_err(|e| e.with_resource_id(record.id))?;
        if let Some(intensity) = record.intensity_level {
            log = log.with_intensity(intensity)?;
        }
        log.mission_id = record.mission_id;
        log.main_problem = record.main_problem;
        log.training_notes = record.training_notes;
        log.general_training_type = record.general_training_type;
        log.objectives_achieved = record.objectives_achieved;
        log.game_plan_id = record.game_plan_id;
        log.created_at = record.created_at;
        Ok(log)
    }
}

/// Ratio of successful escapes to attempts, 0 when no attempts were made
#[must_use]
pub fn escape_rate(attempts: u32, successes: u32) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        f64::from(successes) / f64::from(attempts)
    }
}

impl TrainingLog {
    /// Create a log with a derived escape rate
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when successes exceed attempts or attempts
    /// exceed the per-session cap
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        session_date: DateTime<Utc>,
        escape_attempts: u32,
        successful_escapes: u32,
    ) -> AppResult<Self> {
        validate_counts(escape_attempts, successful_escapes)?;
        Ok(Self {
            id: id.into(),
            user_id: user_id.into(),
            mission_id: None,
            session_date,
            escape_attempts,
            successful_escapes,
            escape_rate: escape_rate(escape_attempts, successful_escapes),
            main_problem: None,
            training_notes: None,
            intensity_level: None,
            general_training_type: None,
            objectives_achieved: Vec::new(),
            game_plan_id: None,
            created_at: session_date,
        })
    }

    /// Attach the session to a mission
    #[must_use]
    pub fn for_mission(mut self, mission_id: impl Into<String>) -> Self {
        self.mission_id = Some(mission_id.into());
        self
    }

    /// Record the main problem of the session
    #[must_use]
    pub fn with_problem(mut self, problem: impl Into<String>) -> Self {
        self.main_problem = Some(problem.into());
        self
    }

    /// Record free-text notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.training_notes = Some(notes.into());
        self
    }

    /// Mark the session as a general (non-mission) session
    #[must_use]
    pub fn with_general_type(mut self, kind: GeneralTrainingType) -> Self {
        self.general_training_type = Some(kind);
        self
    }

    /// Record the session intensity
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` outside the 1-10 scale
    pub fn with_intensity(mut self, intensity: u8) -> AppResult<Self> {
        if !(MIN_INTENSITY_LEVEL..=MAX_INTENSITY_LEVEL).contains(&intensity) {
            return Err(AppError::out_of_range(format!(
                "Intensity {intensity} must be between {MIN_INTENSITY_LEVEL} and {MAX_INTENSITY_LEVEL}"
            ))
            .with_resource_id(self.id));
        }
        self.intensity_level = Some(intensity);
        Ok(self)
    }

    /// Record objective outcomes against a game plan
    #[must_use]
    pub fn with_achievements(
        mut self,
        game_plan_id: impl Into<String>,
        achievements: Vec<ObjectiveAchievement>,
    ) -> Self {
        self.game_plan_id = Some(game_plan_id.into());
        self.objectives_achieved = achievements;
        self
    }

    /// Apply an edit to the attempt counts, re-deriving the escape rate
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` under the same rules as [`TrainingLog::new`]
    pub fn update_counts(&mut self, escape_attempts: u32, successful_escapes: u32) -> AppResult<()> {
        validate_counts(escape_attempts, successful_escapes)?;
        self.escape_attempts = escape_attempts;
        self.successful_escapes = successful_escapes;
        self.escape_rate = escape_rate(escape_attempts, successful_escapes);
        Ok(())
    }

    /// Whether this log was recorded against the given mission
    #[must_use]
    pub fn belongs_to(&self, mission_id: &str) -> bool {
        self.mission_id.as_deref() == Some(mission_id)
    }
}

fn validate_counts(attempts: u32, successes: u32) -> AppResult<()> {
    if successes > attempts {
        return Err(AppError::out_of_range(format!(
            "Successful escapes ({successes}) cannot exceed attempts ({attempts})"
        )));
    }
    if attempts > MAX_ESCAPE_ATTEMPTS {
        return Err(AppError::out_of_range(format!(
            "Escape attempts ({attempts}) exceed the per-session limit of {MAX_ESCAPE_ATTEMPTS}"
        )));
    }
    Ok(())
}
