// ABOUTME: Mission creation with templated weekly goals and reference videos per position
// ABOUTME: Helpers for selecting a user's active mission and the logs recorded against it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Mission planning
//!
//! A mission is four weekly goals focused on one position. The planner builds
//! new missions from the weekly goal templates below and answers the two
//! selection questions the generator leaves to its caller: which mission is
//! active, and which logs belong to it.

use apex_core::constants::mission::MAX_CONCURRENT_MISSIONS;
use apex_core::errors::{AppError, AppResult};
use apex_core::models::{Mission, MissionType, Position, TrainingLog, WeeklyGoal};
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

/// Weekly goal text and reference video for one week
struct GoalTemplate {
    description: &'static str,
    video_url: &'static str,
    video_title: &'static str,
}

const fn goal(
    description: &'static str,
    video_url: &'static str,
    video_title: &'static str,
) -> GoalTemplate {
    GoalTemplate {
        description,
        video_url,
        video_title,
    }
}

const fn templates_for(position: Position) -> [GoalTemplate; 4] {
    match position {
        Position::SideControl => [
            goal(
                "Master inside elbow concept + basic escape",
                "https://youtube.com/watch?v=by85KB6wf8A",
                "Lachlan Giles - 3 MUST-KNOW Side Control Escapes",
            ),
            goal(
                "Add frame timing and hip escape",
                "https://youtube.com/watch?v=GW0wLdv8VW8",
                "Bernardo Faria - North South Escape",
            ),
            goal(
                "Chain escapes under resistance",
                "https://youtube.com/watch?v=gnAhAdE_A90",
                "Lachlan Giles - The Best Way to Escape Side Control",
            ),
            goal(
                "Test and refine under pressure",
                "https://youtube.com/watch?v=by85KB6wf8A&t=441s",
                "Lachlan Giles - Sit-Up Escape from Side Control",
            ),
        ],
        Position::Mount => [
            goal(
                "Defensive framing and trap & roll basics",
                "https://youtube.com/watch?v=EMEueexp9zU",
                "John Danaher - How To Do The Perfect BJJ Mount Escape",
            ),
            goal(
                "Elbow escape fundamentals",
                "https://youtube.com/watch?v=lSAYNVWIbnA",
                "Lachlan Giles - Escaping the Mount (Choosing the Escape)",
            ),
            goal(
                "Combining escapes and transitions",
                "https://youtube.com/watch?v=Olqs4avtdhU",
                "The Grapple Lab - Fundamental Mount Escapes Everyone Should Know",
            ),
            goal(
                "Live testing and refinement",
                "https://youtube.com/watch?v=EMEueexp9zU&t=720s",
                "John Danaher - Advanced Mount Escape Variations",
            ),
        ],
        Position::Back => [
            goal(
                "Hand fighting and preventing hooks",
                "https://youtube.com/watch?v=9n6rcl-eLY8",
                "John Danaher - Back System Concepts (Back Attack/Defense Ideas)",
            ),
            goal(
                "Escaping the back control",
                "https://youtube.com/watch?v=Nhca-P5Uj20",
                "Lachlan Giles - Escaping Back Control (EBI / No Gi)",
            ),
            goal(
                "Counter-attacks and reversals",
                "https://youtube.com/watch?v=uT-7lJxykCg",
                "Craig Jones - Back Escape Technique with Volkanovski",
            ),
            goal(
                "Stress testing under pressure",
                "https://youtube.com/watch?v=gQp4DKWjs1w",
                "Craig Jones - Escapes Everything (Back Defense Highlights)",
            ),
        ],
        Position::Guard => [
            goal(
                "Basic guard retention concepts",
                "https://youtube.com/watch?v=by85KB6wf8A",
                "Lachlan Giles - Guard Retention Through Frames",
            ),
            goal(
                "Framing and distance management",
                "https://youtube.com/watch?v=ODuQCA88oY4",
                "John Danaher - 5 Tips To Pass ANY Guard (Distance Management)",
            ),
            goal(
                "Recovery techniques",
                "https://youtube.com/watch?v=UTaZzbHMr-s",
                "Keenan Cornelius - The 8 Layers of Guard Retention",
            ),
            goal(
                "Live guard retention drills",
                "https://youtube.com/watch?v=1cKr7xJ-0i8",
                "Keenan Cornelius - Late Guard Recovery Trick",
            ),
        ],
        Position::ClosedGuard => [
            goal(
                "Posture breaking fundamentals",
                "https://youtube.com/watch?v=ZKsfnBbBdjk",
                "Breaking Posture in Closed Guard (The Complete Guide)",
            ),
            goal(
                "Basic submission setups",
                "https://youtube.com/watch?v=jFRuW1WUfyU",
                "Bernardo Faria - Closed Guard: Breaking Posture and Armbar",
            ),
            goal(
                "Chaining attacks",
                "https://youtube.com/watch?v=ypi3ie6hKTI",
                "John Danaher - Closed Guard Fundamentals",
            ),
            goal(
                "Testing your A-game",
                "https://youtube.com/watch?v=nU9YxDabnSU",
                "Gordon Ryan - Understanding The Closed Guard",
            ),
        ],
        Position::OpenGuard => [
            goal(
                "Open guard basics and grips",
                "https://youtube.com/watch?v=UTaZzbHMr-s",
                "Keenan Cornelius - Open Guard Grips & Distance Control",
            ),
            goal(
                "Sweeps from open guard",
                "https://youtube.com/watch?v=cdMxuXC_x9s",
                "Bernardo Faria - Easy and Effective Open Guard Sweep",
            ),
            goal(
                "Submission threats",
                "https://youtube.com/watch?v=f7A1vv0-A2U",
                "Bernardo Faria - Basic X Guard Sweep",
            ),
            goal(
                "Live sparring from open guard",
                "https://youtube.com/watch?v=ABW1NHggF9Q",
                "Jon Thomas - Lasso Guard Chair Sweep",
            ),
        ],
        Position::HalfGuard => [
            goal(
                "Half guard fundamentals",
                "https://youtube.com/watch?v=zDD2ORNn_yw",
                "Bernardo Faria - Pulling Deep Half Guard & Faria Sweep",
            ),
            goal(
                "Sweeps and recoveries",
                "https://youtube.com/watch?v=pW2YL_n8Q_U",
                "Lachlan Giles - The Main Sweep from Half Guard",
            ),
            goal(
                "Submissions from half guard",
                "https://youtube.com/watch?v=-xQy1shvl7w",
                "Craig Jones - Z Guard System",
            ),
            goal(
                "Testing your half guard game",
                "https://youtube.com/watch?v=RQf5WZNLmEA",
                "Gordon Ryan - Effective Half Guard Passing",
            ),
        ],
    }
}

/// The four weekly goals for a position, numbered 1-4
#[must_use]
pub fn weekly_goal_templates(position: Position) -> Vec<WeeklyGoal> {
    (1_u8..)
        .zip(templates_for(position))
        .map(|(week, template)| {
            WeeklyGoal::new(week, template.description)
                .with_video(template.video_url, template.video_title)
        })
        .collect()
}

/// Default goal text for a new mission
#[must_use]
pub fn default_goal_description(mission_type: MissionType, position: Position) -> String {
    match mission_type {
        MissionType::Defense => format!("Escape {} 50% of the time", position.display_name()),
        MissionType::AGame => format!("Build an A-game from {}", position.display_name()),
    }
}

/// Builds missions and answers mission/log selection questions
#[derive(Debug, Clone, Copy, Default)]
pub struct MissionPlanner;

impl MissionPlanner {
    /// Start a new active four-week mission with templated weekly goals
    #[must_use]
    pub fn start_mission(
        user_id: &str,
        mission_type: MissionType,
        position: Position,
        goal_description: Option<&str>,
        start: DateTime<Utc>,
    ) -> Mission {
        let goal = goal_description.map_or_else(
            || default_goal_description(mission_type, position),
            str::to_owned,
        );
        let mission = Mission::new(
            Uuid::new_v4().to_string(),
            user_id,
            mission_type,
            position,
            goal,
            start,
        )
        .with_weekly_goals(weekly_goal_templates(position));

        info!(
            mission_id = %mission.id,
            user_id = %user_id,
            position = %position,
            "Started new mission"
        );
        mission
    }

    /// Start a mission after checking the user has no other active mission
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the user already has an active mission
    pub fn start_exclusive(
        existing: &[Mission],
        user_id: &str,
        mission_type: MissionType,
        position: Position,
        goal_description: Option<&str>,
        start: DateTime<Utc>,
    ) -> AppResult<Mission> {
        let active = existing
            .iter()
            .filter(|mission| mission.user_id == user_id && mission.is_active())
            .count();
        if active >= MAX_CONCURRENT_MISSIONS {
            return Err(AppError::invalid_input(format!(
                "User already has {active} active mission(s)"
            ))
            .with_user_id(user_id));
        }
        Ok(Self::start_mission(
            user_id,
            mission_type,
            position,
            goal_description,
            start,
        ))
    }

    /// The user's active mission, if any
    #[must_use]
    pub fn active_mission<'a>(missions: &'a [Mission], user_id: &str) -> Option<&'a Mission> {
        missions
            .iter()
            .find(|mission| mission.user_id == user_id && mission.is_active())
    }

    /// Logs recorded against a mission, in input order
    #[must_use]
    pub fn logs_for_mission(logs: &[TrainingLog], mission_id: &str) -> Vec<TrainingLog> {
        logs.iter()
            .filter(|log| log.belongs_to(mission_id))
            .cloned()
            .collect()
    }
}
