// ABOUTME: Canned coaching text: keyword-matched mental cues and per-week fallback plans
// ABOUTME: Keyword tables are ordered; the first matching keyword wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use apex_core::models::Position;

/// Keyword to mental cue, checked in order against a lowercased description
pub const MENTAL_CUES: [(&str, &str); 8] = [
    ("inside elbow", "Elbow to hip, frame the neck"),
    ("frame", "Frame early, escape often"),
    ("hip escape", "Bridge, shrimp, recover guard"),
    ("posture", "Break posture, attack immediately"),
    ("distance", "Control distance, retain guard"),
    ("underhook", "Get underhook, come to knees"),
    ("timing", "React fast, escape early"),
    ("pressure", "Stay calm, breathe, escape"),
];

/// Cue used when no keyword matches
pub const DEFAULT_MENTAL_CUE: &str = "Stay technical, stay calm";

const FALLBACK_WEEK_ONE: &str = "If struggling, focus on just maintaining frames and breathing. Don't worry about completing the escape yet - build the foundation first.";
const FALLBACK_WEEK_TWO: &str = "If the technique isn't working, go back to Week 1 fundamentals. Make sure your frames are solid before adding movement.";
const FALLBACK_WEEK_THREE: &str = "If you're getting stuck, break it into smaller pieces. Practice each step separately before chaining them together.";
const FALLBACK_LATE: &str = "If under heavy pressure, focus on defense and survival. It's better to maintain position than force a bad escape.";

/// Pick the mental cue for a primary objective description
#[must_use]
pub fn mental_cue_for(description: &str) -> &'static str {
    let lowered = description.to_lowercase();
    MENTAL_CUES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(DEFAULT_MENTAL_CUE, |(_, cue)| cue)
}

/// Fallback plan for a mission week; independent of position and performance
#[must_use]
pub const fn fallback_plan_for(week: u8) -> &'static str {
    match week {
        1 => FALLBACK_WEEK_ONE,
        2 => FALLBACK_WEEK_TWO,
        3 => FALLBACK_WEEK_THREE,
        _ => FALLBACK_LATE,
    }
}

/// Label for where rolling rounds should start
#[must_use]
pub fn starting_position_label(position: Position) -> String {
    if position.is_defensive() {
        format!("Bottom {}", position.display_name())
    } else {
        position.capitalized_name()
    }
}

/// Reflection prompt between live rounds
#[must_use]
pub const fn between_rounds_tip(position: Position) -> &'static str {
    if position.is_defensive() {
        "If you escaped, what worked? If not, what was the main obstacle?"
    } else {
        "Did you control distance and timing? What adjustment would help?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_keyword_wins() {
        // "inside elbow" is checked before "frame"
        assert_eq!(
            mental_cue_for("Establish INSIDE ELBOW frame"),
            "Elbow to hip, frame the neck"
        );
        assert_eq!(
            mental_cue_for("Create effective frames before opponent settles weight"),
            "Frame early, escape often"
        );
        assert_eq!(mental_cue_for("Escape mount"), DEFAULT_MENTAL_CUE);
    }

    #[test]
    fn test_fallback_plan_saturates_after_week_three() {
        assert!(fallback_plan_for(1).contains("build the foundation"));
        assert!(fallback_plan_for(2).contains("Week 1 fundamentals"));
        assert!(fallback_plan_for(3).contains("smaller pieces"));
        assert_eq!(fallback_plan_for(4), fallback_plan_for(9));
    }

    #[test]
    fn test_starting_position_label() {
        assert_eq!(
            starting_position_label(Position::SideControl),
            "Bottom side control"
        );
        assert_eq!(starting_position_label(Position::HalfGuard), "Half guard");
    }
}
