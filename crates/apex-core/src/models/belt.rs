// ABOUTME: Belt rank enumeration and the three-bucket skill level derived from it
// ABOUTME: Parsing and display implementations used by the CLI and JSON inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Brazilian Jiu-Jitsu belt rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeltLevel {
    /// Level 1
    White,
    /// Level 2
    Blue,
    /// Level 3
    Purple,
    /// Level 4
    Brown,
    /// Level 5
    Black,
}

impl BeltLevel {
    /// All belts in rank order
    pub const ALL: [Self; 5] = [
        Self::White,
        Self::Blue,
        Self::Purple,
        Self::Brown,
        Self::Black,
    ];

    /// Rank as a 1-based level
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::White => 1,
            Self::Blue => 2,
            Self::Purple => 3,
            Self::Brown => 4,
            Self::Black => 5,
        }
    }

    /// Collapse the rank into a skill bucket
    #[must_use]
    pub const fn skill_level(self) -> SkillLevel {
        match self {
            Self::White => SkillLevel::Beginner,
            Self::Blue | Self::Purple => SkillLevel::Intermediate,
            Self::Brown | Self::Black => SkillLevel::Advanced,
        }
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Brown => "brown",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for BeltLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeltLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|belt| belt.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown belt level: {s}")))
    }
}

/// Skill bucket used for drill eligibility and target selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    /// White belt
    Beginner,
    /// Blue and purple belts
    Intermediate,
    /// Brown and black belts
    Advanced,
}

impl SkillLevel {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown skill level: {other}"
            ))),
        }
    }
}
