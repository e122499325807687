// ABOUTME: Validation limits for logged training sessions
// ABOUTME: Escape attempt caps and the accepted intensity scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Upper bound on escape attempts recorded for a single session
pub const MAX_ESCAPE_ATTEMPTS: u32 = 100;

/// Lowest accepted session intensity
pub const MIN_INTENSITY_LEVEL: u8 = 1;

/// Highest accepted session intensity
pub const MAX_INTENSITY_LEVEL: u8 = 10;

/// Label used when no problem dominates a review window
pub const NO_PROBLEM_IDENTIFIED: &str = "No specific problem identified";
