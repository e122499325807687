// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for missions, training logs, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the domain that owns them rather than living in a
//! single flat file.

/// Training log validation limits
pub mod training_log;

/// Mission structure
pub mod mission {
    /// A mission spans four weekly blocks
    pub const DEFAULT_DURATION_WEEKS: u8 = 4;
    /// First week number of a mission
    pub const FIRST_WEEK: u8 = 1;
    /// Last week number; later dates saturate here
    pub const LAST_WEEK: u8 = 4;
    /// Days in one mission week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Only one mission may be active per user
    pub const MAX_CONCURRENT_MISSIONS: usize = 1;
}

/// Session game plan shape
pub mod game_plan {
    /// Upper bound on drill recommendations in one plan
    pub const MAX_DRILL_RECOMMENDATIONS: usize = 3;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Main service name
    pub const APEX_GAMEPLAN: &str = "apex-gameplan";
}
