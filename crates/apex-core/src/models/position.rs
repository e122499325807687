// ABOUTME: Body position enumeration that a training mission focuses on
// ABOUTME: Display names, defensive classification, and snake_case parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Focal body position of a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Bottom of side control
    SideControl,
    /// Bottom of mount
    Mount,
    /// Opponent has back control
    Back,
    /// Generic guard retention
    Guard,
    /// Closed guard (offensive)
    ClosedGuard,
    /// Open guard (offensive)
    OpenGuard,
    /// Half guard bottom
    HalfGuard,
}

impl Position {
    /// Every position in declaration order
    pub const ALL: [Self; 7] = [
        Self::SideControl,
        Self::Mount,
        Self::Back,
        Self::Guard,
        Self::ClosedGuard,
        Self::OpenGuard,
        Self::HalfGuard,
    ];

    /// snake_case identifier as stored in mission records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SideControl => "side_control",
            Self::Mount => "mount",
            Self::Back => "back",
            Self::Guard => "guard",
            Self::ClosedGuard => "closed_guard",
            Self::OpenGuard => "open_guard",
            Self::HalfGuard => "half_guard",
        }
    }

    /// Human-readable name: the identifier with underscores replaced by spaces
    #[must_use]
    pub fn display_name(self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Display name with the first letter uppercased ("Closed guard")
    #[must_use]
    pub fn capitalized_name(self) -> String {
        let name = self.display_name();
        let mut chars = name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Positions that are inherently escapes from the bottom
    #[must_use]
    pub const fn is_defensive(self) -> bool {
        matches!(self, Self::SideControl | Self::Mount | Self::Back)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown position: {s}")))
    }
}
