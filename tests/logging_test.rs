// ABOUTME: Tests for logging configuration
// ABOUTME: Validates environment parsing, defaults, and verbose level promotion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use apex_gameplan::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

fn clear_env() {
    for var in [
        "RUST_LOG",
        "LOG_FORMAT",
        "ENVIRONMENT",
        "SERVICE_NAME",
        "LOG_INCLUDE_LOCATION",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "info");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    // production always records source locations
    assert!(config.include_location);

    clear_env();
}

#[test]
#[serial]
fn test_logging_defaults_without_env() {
    clear_env();
    let config = LoggingConfig::from_env();
    assert_eq!(config, LoggingConfig::default());
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_name, "apex-gameplan");
    assert!(!config.include_location);
}

#[test]
fn test_verbose_promotes_level() {
    let config = LoggingConfig::default().verbose();
    assert_eq!(config.level, "debug");

    let trace = LoggingConfig {
        level: "trace".into(),
        ..LoggingConfig::default()
    }
    .verbose();
    assert_eq!(trace.level, "trace");
}
