// ABOUTME: Apex game plan CLI - runs the game plan engine over JSON inputs
// ABOUTME: Generates session plans, weekly reviews, drill listings, and new missions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate today's game plan for a mission
//! apex-gameplan generate --mission mission.json --logs logs.json --belt blue
//!
//! # Reproduce a plan for a fixed moment with custom tables
//! apex-gameplan generate --mission mission.json --belt white \
//!     --now 2025-03-10T18:00:00Z --drills drills.json --objectives objectives.json
//!
//! # Week-over-week progress for a mission
//! apex-gameplan review --logs logs.json --mission-id 4f1c...
//!
//! # Drills for a position (optionally narrowed to a week and skill level)
//! apex-gameplan drills --position mount --week 1 --skill beginner
//!
//! # Start a new mission with templated weekly goals
//! apex-gameplan mission --position half_guard --user user-1 --mission-type a-game
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use apex_gameplan::core::models::{BeltLevel, MissionType, Position, SkillLevel};
use apex_gameplan::logging::LoggingConfig;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "apex-gameplan",
    about = "Apex BJJ game plan engine",
    long_about = "Generates rules-based training game plans for four-week BJJ missions from JSON mission and training log records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a session game plan for a mission
    Generate {
        /// Mission JSON file
        #[arg(long)]
        mission: PathBuf,

        /// Training log JSON array; only logs recorded against the mission are used
        #[arg(long)]
        logs: Option<PathBuf>,

        /// Belt rank (white, blue, purple, brown, black)
        #[arg(long)]
        belt: BeltLevel,

        /// Generation time in RFC 3339 (defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Replacement drill library JSON
        #[arg(long)]
        drills: Option<PathBuf>,

        /// Replacement objective table JSON
        #[arg(long)]
        objectives: Option<PathBuf>,
    },

    /// Summarize this week against last week
    Review {
        /// Training log JSON array
        #[arg(long)]
        logs: PathBuf,

        /// Only consider logs recorded against this mission
        #[arg(long)]
        mission_id: Option<String>,

        /// Reference time in RFC 3339 (defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// List drills from the built-in library
    Drills {
        /// Position (e.g. `side_control`, "half guard")
        #[arg(long)]
        position: Position,

        /// Mission week; requires --skill
        #[arg(long, requires = "skill")]
        week: Option<u8>,

        /// Skill level (beginner, intermediate, advanced); requires --week
        #[arg(long, requires = "week")]
        skill: Option<SkillLevel>,
    },

    /// Start a new mission with templated weekly goals
    Mission {
        /// Focal position
        #[arg(long)]
        position: Position,

        /// Owning user id
        #[arg(long)]
        user: String,

        /// Goal text (defaults to a templated goal)
        #[arg(long)]
        goal: Option<String>,

        /// Mission type
        #[arg(long, value_enum, default_value_t = MissionKind::Defense)]
        mission_type: MissionKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MissionKind {
    Defense,
    #[value(name = "a-game")]
    AGame,
}

impl From<MissionKind> for MissionType {
    fn from(kind: MissionKind) -> Self {
        match kind {
            MissionKind::Defense => Self::Defense,
            MissionKind::AGame => Self::AGame,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    match cli.command {
        Command::Generate {
            mission,
            logs,
            belt,
            now,
            drills,
            objectives,
        } => commands::plan::generate(&commands::plan::GenerateArgs {
            mission,
            logs,
            belt,
            now: now.unwrap_or_else(Utc::now),
            drills,
            objectives,
        }),
        Command::Review {
            logs,
            mission_id,
            now,
        } => commands::plan::review(&logs, mission_id.as_deref(), now.unwrap_or_else(Utc::now)),
        Command::Drills {
            position,
            week,
            skill,
        } => commands::library::drills(position, week.zip(skill)),
        Command::Mission {
            position,
            user,
            goal,
            mission_type,
        } => commands::library::mission(position, &user, goal.as_deref(), mission_type.into()),
    }
}
