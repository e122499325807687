// ABOUTME: Main library entry point for the Apex BJJ game plan engine
// ABOUTME: Re-exports the core and intelligence crates and adds logging and input loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Apex Game Plan
//!
//! Rules-based training game plans for Brazilian Jiu-Jitsu missions.
//!
//! A mission is a four-week block focused on one position. Given the mission,
//! the sessions logged against it, and the athlete's belt, the engine produces
//! a [`SessionGamePlan`](apex_core::models::SessionGamePlan) with three
//! objectives, drills, a mental cue, a rolling strategy, and a fallback plan.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use apex_gameplan::core::models::{BeltLevel, MissionType, Position};
//! use apex_gameplan::intelligence::{GamePlanEngineTrait, GamePlanGenerator, MissionPlanner};
//! use chrono::Utc;
//!
//! let mission = MissionPlanner::start_mission(
//!     "user-1",
//!     MissionType::Defense,
//!     Position::SideControl,
//!     None,
//!     Utc::now(),
//! );
//! let plan = GamePlanGenerator::new().generate(&mission, &[], BeltLevel::Blue)?;
//! println!("{}", plan.mental_cue);
//! # Ok::<(), apex_gameplan::intelligence::GamePlanError>(())
//! ```

/// Core models, errors, and constants
pub use apex_core as core;

/// Reference tables, analysis, and the game plan generator
pub use apex_intelligence as intelligence;

/// JSON input loading for missions, logs, and reference tables
pub mod input;

/// Structured logging setup
pub mod logging;
