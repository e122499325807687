// ABOUTME: Command modules for apex-gameplan
// ABOUTME: Plan generation and review, plus library and mission lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod library;
pub mod plan;
