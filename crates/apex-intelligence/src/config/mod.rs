// ABOUTME: Configuration module for the game plan engine
// ABOUTME: Thresholds, recurrence window, target tiers, and limits with env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Game Plan Engine Configuration
//!
//! Defaults reproduce the mobile app's rule table exactly. Every value can be
//! overridden through `APEX_GAMEPLAN_*` environment variables; the merged
//! result is validated before use.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use apex_core::constants::game_plan::MAX_DRILL_RECOMMENDATIONS;
use apex_core::models::SkillLevel;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static GAME_PLAN_CONFIG: OnceLock<GamePlanConfig> = OnceLock::new();

/// Main game plan configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GamePlanConfig {
    /// Escape-rate tiers for the performance objective
    pub thresholds: EscapeRateThresholds,
    /// Recurring-problem detection window
    pub recurrence: RecurrenceConfig,
    /// Primary objective targets per skill bucket
    pub targets: ObjectiveTargets,
    /// Output size limits
    pub limits: PlanLimits,
}

/// Average escape-rate tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscapeRateThresholds {
    /// Below this the plan falls back to framing fundamentals
    pub low_rate: f64,
    /// At or above this the plan adds chaining complexity
    pub high_rate: f64,
}

/// Recurring problem detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceConfig {
    /// Number of most recent logs inspected
    pub window_size: usize,
    /// Occurrences within the window for a problem to count as recurring
    pub min_occurrences: usize,
}

/// Primary objective target reps by skill bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveTargets {
    /// White belt
    pub beginner: u32,
    /// Blue and purple belts
    pub intermediate: u32,
    /// Brown and black belts
    pub advanced: u32,
}

/// Output size limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Maximum drill recommendations per plan
    pub max_drills: usize,
}

impl Default for EscapeRateThresholds {
    fn default() -> Self {
        Self {
            low_rate: 0.30,
            high_rate: 0.50,
        }
    }
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            window_size: 3,
            min_occurrences: 2,
        }
    }
}

impl Default for ObjectiveTargets {
    fn default() -> Self {
        Self {
            beginner: 3,
            intermediate: 4,
            advanced: 5,
        }
    }
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            max_drills: MAX_DRILL_RECOMMENDATIONS,
        }
    }
}

impl ObjectiveTargets {
    /// Target reps for a skill bucket
    #[must_use]
    pub const fn for_skill(&self, skill: SkillLevel) -> u32 {
        match skill {
            SkillLevel::Beginner => self.beginner,
            SkillLevel::Intermediate => self.intermediate,
            SkillLevel::Advanced => self.advanced,
        }
    }
}

impl GamePlanConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        GAME_PLAN_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load game plan config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = &self.thresholds;
        if !(0.0..=1.0).contains(&rates.low_rate) || !(0.0..=1.0).contains(&rates.high_rate) {
            return Err(ConfigError::ValueOutOfRange(
                "escape rate thresholds must be between 0.0 and 1.0",
            ));
        }
        if rates.low_rate > rates.high_rate {
            return Err(ConfigError::InvalidRange("low_rate must be <= high_rate"));
        }

        if self.recurrence.min_occurrences == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_occurrences must be at least 1",
            ));
        }
        if self.recurrence.window_size < self.recurrence.min_occurrences {
            return Err(ConfigError::InvalidRange(
                "window_size must be >= min_occurrences",
            ));
        }

        let targets = &self.targets;
        if targets.beginner == 0 || targets.intermediate == 0 || targets.advanced == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "objective targets must be positive",
            ));
        }

        if self.limits.max_drills == 0 {
            return Err(ConfigError::ValueOutOfRange("max_drills must be at least 1"));
        }
        if self.limits.max_drills > MAX_DRILL_RECOMMENDATIONS {
            return Err(ConfigError::ValueOutOfRange("max_drills must be at most 3"));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when a variable is set but does not parse
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "APEX_GAMEPLAN_LOW_RATE_THRESHOLD",
            &mut self.thresholds.low_rate,
        )?;
        Self::apply_env_var(
            "APEX_GAMEPLAN_HIGH_RATE_THRESHOLD",
            &mut self.thresholds.high_rate,
        )?;

        Self::apply_env_var(
            "APEX_GAMEPLAN_RECURRENCE_WINDOW",
            &mut self.recurrence.window_size,
        )?;
        Self::apply_env_var(
            "APEX_GAMEPLAN_RECURRENCE_MIN_OCCURRENCES",
            &mut self.recurrence.min_occurrences,
        )?;

        Self::apply_env_var("APEX_GAMEPLAN_TARGET_BEGINNER", &mut self.targets.beginner)?;
        Self::apply_env_var(
            "APEX_GAMEPLAN_TARGET_INTERMEDIATE",
            &mut self.targets.intermediate,
        )?;
        Self::apply_env_var("APEX_GAMEPLAN_TARGET_ADVANCED", &mut self.targets.advanced)?;

        Self::apply_env_var("APEX_GAMEPLAN_MAX_DRILLS", &mut self.limits.max_drills)?;

        Ok(self)
    }
}
