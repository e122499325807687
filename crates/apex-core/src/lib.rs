// ABOUTME: Core types and constants for the Apex BJJ game plan engine
// ABOUTME: Foundation crate with error handling, training data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Apex Core
//!
//! Foundation crate providing shared types and constants for the Apex BJJ
//! training engine. This crate is designed to change infrequently so the
//! intelligence crate and the CLI compile against a stable surface.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Mission structure and training log limits
//! - **models**: Missions, training logs, belt ranks, positions, game plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Mission, TrainingLog, SessionGamePlan, etc.)
pub mod models;
