// ABOUTME: Static drill library keyed by position, mission week, and skill level
// ABOUTME: Exact-match lookups with a beginner baseline that is always eligible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Drill library
//!
//! The library is read-only reference data. The built-in table ships with the
//! crate; callers may substitute their own via [`DrillLibrary::from_json`].

use std::sync::OnceLock;

use apex_core::errors::AppResult;
use apex_core::models::{DrillRecommendation, Position, SkillLevel};
use serde::{Deserialize, Serialize};

static BUILTIN_LIBRARY: OnceLock<DrillLibrary> = OnceLock::new();

/// Library entry binding a drill to the mission slot it serves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillTemplate {
    /// Template identifier
    pub id: String,
    /// Position the drill trains
    pub position: Position,
    /// Skill tag; beginner drills are eligible for every bucket
    pub skill_level: SkillLevel,
    /// Mission week the drill belongs to
    pub week: u8,
    /// The drill itself
    pub drill: DrillRecommendation,
}

/// Ordered collection of drill templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrillLibrary {
    templates: Vec<DrillTemplate>,
}

impl DrillLibrary {
    /// Build a library from templates, preserving their order
    #[must_use]
    pub const fn new(templates: Vec<DrillTemplate>) -> Self {
        Self { templates }
    }

    /// Shared built-in library
    pub fn builtin() -> &'static Self {
        BUILTIN_LIBRARY.get_or_init(|| Self::new(builtin_templates()))
    }

    /// Parse a library from a JSON array of templates
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the template shape
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// All templates in library order
    #[must_use]
    pub fn templates(&self) -> &[DrillTemplate] {
        &self.templates
    }

    /// Number of templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the library has no templates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Drills for an exact `(position, week)` slot whose skill tag matches the
    /// bucket or is beginner, in library order
    #[must_use]
    pub fn drills_for(
        &self,
        position: Position,
        week: u8,
        skill: SkillLevel,
    ) -> Vec<&DrillRecommendation> {
        self.templates
            .iter()
            .filter(|template| {
                template.position == position
                    && template.week == week
                    && (template.skill_level == skill
                        || template.skill_level == SkillLevel::Beginner)
            })
            .map(|template| &template.drill)
            .collect()
    }

    /// Every template for a position regardless of week or skill
    #[must_use]
    pub fn all_for_position(&self, position: Position) -> Vec<&DrillTemplate> {
        self.templates
            .iter()
            .filter(|template| template.position == position)
            .collect()
    }

    /// Find a template by its drill id
    #[must_use]
    pub fn find_drill(&self, drill_id: &str) -> Option<&DrillTemplate> {
        self.templates
            .iter()
            .find(|template| template.drill.id == drill_id)
    }
}

/// Compact row used to declare the built-in table
struct DrillRow {
    id: &'static str,
    position: Position,
    skill: SkillLevel,
    week: u8,
    drill_id: &'static str,
    name: &'static str,
    duration: u32,
    partner: bool,
    video: Option<&'static str>,
    instructions: [&'static str; 5],
    focus: [&'static str; 3],
}

impl From<DrillRow> for DrillTemplate {
    fn from(row: DrillRow) -> Self {
        Self {
            id: row.id.to_owned(),
            position: row.position,
            skill_level: row.skill,
            week: row.week,
            drill: DrillRecommendation {
                id: row.drill_id.to_owned(),
                name: row.name.to_owned(),
                duration: row.duration,
                partner_required: row.partner,
                video_clip_url: row.video.map(str::to_owned),
                instructions: row.instructions.iter().map(|s| (*s).to_owned()).collect(),
                focus_points: row.focus.iter().map(|s| (*s).to_owned()).collect(),
            },
        }
    }
}

// Long function: declarative table of every built-in drill
fn builtin_templates() -> Vec<DrillTemplate> {
    use Position::{Back, ClosedGuard, Guard, HalfGuard, Mount, OpenGuard, SideControl};
    use SkillLevel::{Advanced, Beginner, Intermediate};

    let rows = vec![
        // Side control: week 1 fundamentals
        DrillRow {
            id: "sc-week1-inside-elbow",
            position: SideControl,
            skill: Beginner,
            week: 1,
            drill_id: "inside-elbow-entry",
            name: "Inside Elbow Entry Drill",
            duration: 180,
            partner: true,
            video: Some("https://youtube.com/watch?v=by85KB6wf8A&t=45s"),
            instructions: [
                "Partner starts in side control with light pressure (30%)",
                "Immediately establish inside elbow to their hip",
                "Add opposite hand frame to their neck",
                "Reset after each rep",
                "Goal: 10 clean entries in 3 minutes",
            ],
            focus: [
                "Elbow to hip bone, not ribs",
                "Speed matters - get it before they settle",
                "Keep elbow tight to your body",
            ],
        },
        DrillRow {
            id: "sc-week1-frame-drill",
            position: SideControl,
            skill: Beginner,
            week: 1,
            drill_id: "frame-before-settle",
            name: "Frame Before Settle Drill",
            duration: 180,
            partner: true,
            video: Some("https://youtube.com/watch?v=by85KB6wf8A&t=120s"),
            instructions: [
                "Partner transitions to side control slowly",
                "You must establish frames before they settle weight",
                "Hold frames for 5 seconds",
                "Partner increases pressure gradually",
                "Reset if frames collapse",
            ],
            focus: [
                "Inside elbow + neck frame = strongest position",
                "Elbows stay close to body",
                "Use legs to help create space",
            ],
        },
        DrillRow {
            id: "sc-week1-hip-escape-solo",
            position: SideControl,
            skill: Beginner,
            week: 1,
            drill_id: "hip-escape-movement",
            name: "Hip Escape Movement (Solo)",
            duration: 120,
            partner: false,
            video: None,
            instructions: [
                "Lie on back, simulate side control position",
                "Bridge onto shoulder",
                "Shrimp hip away while maintaining frame",
                "Bring knee to elbow",
                "Repeat 20 times each side",
            ],
            focus: [
                "Bridge first, then shrimp",
                "Create angle, not just distance",
                "Keep frames throughout movement",
            ],
        },
        // Side control: week 2
        DrillRow {
            id: "sc-week2-escape-chain",
            position: SideControl,
            skill: Intermediate,
            week: 2,
            drill_id: "full-escape-chain",
            name: "Full Escape Chain",
            duration: 300,
            partner: true,
            video: Some("https://youtube.com/watch?v=gnAhAdE_A90&t=60s"),
            instructions: [
                "Partner in side control with 50% pressure",
                "Execute: Frame → Bridge → Shrimp → Recover guard",
                "Complete full sequence",
                "Partner can defend but not counter",
                "Goal: 5 successful escapes in 5 minutes",
            ],
            focus: [
                "Each step flows into the next",
                "Don't pause between movements",
                "If stuck, reset and try again",
            ],
        },
        DrillRow {
            id: "sc-week2-timing-drill",
            position: SideControl,
            skill: Intermediate,
            week: 2,
            drill_id: "escape-timing",
            name: "Escape Timing Drill",
            duration: 240,
            partner: true,
            video: None,
            instructions: [
                "Partner in side control, 70% pressure",
                "Wait for them to post hand or shift weight",
                "Execute escape in that moment",
                "Partner actively tries to maintain",
                "Focus on timing, not force",
            ],
            focus: [
                "Feel for weight shifts",
                "Explode when they post",
                "Use their movement against them",
            ],
        },
        // Side control: week 3
        DrillRow {
            id: "sc-week3-pressure-escape",
            position: SideControl,
            skill: Advanced,
            week: 3,
            drill_id: "escape-under-pressure",
            name: "Escape Under Pressure",
            duration: 300,
            partner: true,
            video: Some("https://youtube.com/watch?v=by85KB6wf8A&t=441s"),
            instructions: [
                "Partner in side control with 100% pressure",
                "They actively try to maintain and advance",
                "You must escape using technique, not strength",
                "5 minute round",
                "Track successful escapes vs attempts",
            ],
            focus: [
                "Stay calm under pressure",
                "Wait for opportunities",
                "Chain multiple attempts if first fails",
            ],
        },
        // Mount
        DrillRow {
            id: "mount-week1-trap-bridge",
            position: Mount,
            skill: Beginner,
            week: 1,
            drill_id: "trap-and-bridge",
            name: "Trap and Bridge Drill",
            duration: 180,
            partner: true,
            video: Some("https://youtube.com/watch?v=EMEueexp9zU&t=120s"),
            instructions: [
                "Partner in low mount, hands on your chest",
                "Trap their arm and foot on same side",
                "Bridge explosively to that side",
                "Roll them over",
                "Reset and repeat 10 times each side",
            ],
            focus: [
                "Trap must be secure before bridge",
                "Bridge direction: toward trapped side",
                "Use hips, not just upper body",
            ],
        },
        DrillRow {
            id: "mount-week1-elbow-escape",
            position: Mount,
            skill: Beginner,
            week: 1,
            drill_id: "elbow-escape-basics",
            name: "Elbow Escape to Half Guard",
            duration: 240,
            partner: true,
            video: Some("https://youtube.com/watch?v=EMEueexp9zU&t=300s"),
            instructions: [
                "Partner in mount, light pressure",
                "Frame on hip and neck",
                "Shrimp and insert knee",
                "Recover to half guard",
                "Goal: 8 successful escapes in 4 minutes",
            ],
            focus: [
                "Create space with frames first",
                "Shrimp creates angle for knee",
                "Don't give up back during escape",
            ],
        },
        DrillRow {
            id: "mount-week2-prevent-high-mount",
            position: Mount,
            skill: Intermediate,
            week: 2,
            drill_id: "prevent-high-mount",
            name: "Prevent High Mount",
            duration: 180,
            partner: true,
            video: None,
            instructions: [
                "Partner in low mount",
                "They try to advance to high mount",
                "You must prevent using frames and hip movement",
                "3 minute rounds",
                "Partner can use 60% effort",
            ],
            focus: [
                "Elbows stay tight to body",
                "Don't let them control your arms",
                "Use legs to create distance",
            ],
        },
        DrillRow {
            id: "mount-week3-escape-chain",
            position: Mount,
            skill: Advanced,
            week: 3,
            drill_id: "mount-escape-options",
            name: "Mount Escape Options",
            duration: 300,
            partner: true,
            video: Some("https://youtube.com/watch?v=Olqs4avtdhU"),
            instructions: [
                "Partner in mount, 80% pressure",
                "Attempt trap-and-roll first",
                "If fails, switch to elbow escape",
                "If that fails, try to get to turtle",
                "Practice decision-making under pressure",
            ],
            focus: [
                "Read partner's weight distribution",
                "Don't commit to one escape",
                "Chain attempts smoothly",
            ],
        },
        // Back
        DrillRow {
            id: "back-week1-hand-fighting",
            position: Back,
            skill: Beginner,
            week: 1,
            drill_id: "hand-fighting-basics",
            name: "Hand Fighting to Protect Neck",
            duration: 180,
            partner: true,
            video: Some("https://youtube.com/watch?v=9n6rcl-eLY8&t=180s"),
            instructions: [
                "Partner has back control with both hooks",
                "They slowly attempt to get choke grip",
                "You fight hands and protect neck",
                "Focus on hand position, not escaping yet",
                "3 minute rounds",
            ],
            focus: [
                "Chin down, hands protecting neck",
                "Strip grips before they settle",
                "Stay calm, don't panic",
            ],
        },
        DrillRow {
            id: "back-week2-clear-hooks",
            position: Back,
            skill: Intermediate,
            week: 2,
            drill_id: "hook-removal",
            name: "Clear Hooks Drill",
            duration: 240,
            partner: true,
            video: Some("https://youtube.com/watch?v=Nhca-P5Uj20&t=120s"),
            instructions: [
                "Partner has back with both hooks in",
                "Clear bottom hook first using proper technique",
                "Then address top hook",
                "Partner resists at 50%",
                "Goal: Clear both hooks 5 times in 4 minutes",
            ],
            focus: [
                "Bottom hook first, always",
                "Use your legs to trap and clear",
                "Protect neck while clearing hooks",
            ],
        },
        DrillRow {
            id: "back-week3-escape-to-guard",
            position: Back,
            skill: Advanced,
            week: 3,
            drill_id: "back-to-guard",
            name: "Back Escape to Guard",
            duration: 300,
            partner: true,
            video: Some("https://youtube.com/watch?v=uT-7lJxykCg"),
            instructions: [
                "Partner has back control",
                "Execute full escape sequence",
                "Clear hooks → Turn to guard",
                "Partner actively tries to maintain",
                "5 minute round, track successes",
            ],
            focus: [
                "Don't give up neck during turn",
                "Explosive movement when hooks clear",
                "Recover guard, don't stop at turtle",
            ],
        },
        // Guard retention
        DrillRow {
            id: "guard-week1-distance-management",
            position: Guard,
            skill: Beginner,
            week: 1,
            drill_id: "distance-control",
            name: "Distance Management Drill",
            duration: 180,
            partner: true,
            video: Some("https://youtube.com/watch?v=by85KB6wf8A"),
            instructions: [
                "Start in open guard",
                "Partner tries to close distance slowly",
                "You maintain distance with frames and feet",
                "Don't let them get chest-to-chest",
                "3 minute rounds",
            ],
            focus: [
                "Feet on hips or biceps",
                "Hands control sleeves or wrists",
                "Move hips to maintain distance",
            ],
        },
        DrillRow {
            id: "guard-week2-recovery",
            position: Guard,
            skill: Intermediate,
            week: 2,
            drill_id: "guard-recovery",
            name: "Late Guard Recovery",
            duration: 240,
            partner: true,
            video: Some("https://youtube.com/watch?v=1cKr7xJ-0i8"),
            instructions: [
                "Partner starts halfway through guard pass",
                "You must recover guard before they pass",
                "Partner uses 60% resistance",
                "Reset if they complete pass",
                "Goal: 8 recoveries in 4 minutes",
            ],
            focus: [
                "Use frames to create space",
                "Shrimp to create angle",
                "Get feet back in quickly",
            ],
        },
        DrillRow {
            id: "guard-week3-retention-layers",
            position: Guard,
            skill: Advanced,
            week: 3,
            drill_id: "layered-retention",
            name: "8 Layers of Guard Retention",
            duration: 300,
            partner: true,
            video: Some("https://youtube.com/watch?v=UTaZzbHMr-s"),
            instructions: [
                "Partner tries to pass guard at 80%",
                "You use all retention layers",
                "Distance → Frames → Recovery → Scramble",
                "5 minute round",
                "Track how many passes you prevent",
            ],
            focus: [
                "Don't give up after first layer fails",
                "Each layer buys time for next",
                "Stay active, don't be passive",
            ],
        },
        // Closed guard
        DrillRow {
            id: "closed-week1-break-posture",
            position: ClosedGuard,
            skill: Beginner,
            week: 1,
            drill_id: "posture-breaking",
            name: "Break Posture Drill",
            duration: 180,
            partner: true,
            video: Some("https://youtube.com/watch?v=ZKsfnBbBdjk&t=60s"),
            instructions: [
                "Partner in your closed guard with good posture",
                "Use grips and hips to break them down",
                "Get their head below your chest",
                "Partner resists at 40%",
                "Goal: 10 successful breaks in 3 minutes",
            ],
            focus: [
                "Pull with arms, push with legs",
                "Time the break with their movement",
                "Control head once posture is broken",
            ],
        },
        DrillRow {
            id: "closed-week2-attack-setup",
            position: ClosedGuard,
            skill: Intermediate,
            week: 2,
            drill_id: "submission-setups",
            name: "Submission Setup Drill",
            duration: 240,
            partner: true,
            video: Some("https://youtube.com/watch?v=jFRuW1WUfyU"),
            instructions: [
                "From closed guard with broken posture",
                "Set up armbar, triangle, or kimura",
                "Don't finish, just get to position",
                "Partner can defend at 50%",
                "Alternate between attacks",
            ],
            focus: [
                "Control head and arm",
                "Hip movement is key",
                "Chain attacks if first is defended",
            ],
        },
        // Open guard
        DrillRow {
            id: "open-week1-grips",
            position: OpenGuard,
            skill: Beginner,
            week: 1,
            drill_id: "grip-fighting",
            name: "Open Guard Grip Control",
            duration: 180,
            partner: true,
            video: Some("https://youtube.com/watch?v=UTaZzbHMr-s&t=120s"),
            instructions: [
                "Start in open guard",
                "Establish strong grips (sleeve, collar, or ankle)",
                "Partner tries to break grips",
                "You maintain and re-establish",
                "3 minute rounds",
            ],
            focus: [
                "Grips + foot placement = control",
                "Don't let them stand freely",
                "Reset grips quickly if broken",
            ],
        },
        DrillRow {
            id: "open-week2-sweep",
            position: OpenGuard,
            skill: Intermediate,
            week: 2,
            drill_id: "basic-sweep",
            name: "Open Guard Sweep Drill",
            duration: 240,
            partner: true,
            video: Some("https://youtube.com/watch?v=cdMxuXC_x9s"),
            instructions: [
                "From open guard with grips",
                "Off-balance partner",
                "Execute sweep to top position",
                "Partner resists at 50%",
                "Goal: 6 successful sweeps in 4 minutes",
            ],
            focus: [
                "Break their base first",
                "Use push-pull dynamics",
                "Follow through to top",
            ],
        },
        // Half guard
        DrillRow {
            id: "half-week1-prevent-flatten",
            position: HalfGuard,
            skill: Beginner,
            week: 1,
            drill_id: "stay-on-side",
            name: "Prevent Flattening Drill",
            duration: 180,
            partner: true,
            video: None,
            instructions: [
                "You have half guard",
                "Partner tries to flatten you to back",
                "You stay on your side",
                "Use frames and hip movement",
                "3 minute rounds",
            ],
            focus: [
                "Stay on your side, never flat",
                "Inside arm frames their hip",
                "Use legs to maintain position",
            ],
        },
        DrillRow {
            id: "half-week2-underhook",
            position: HalfGuard,
            skill: Intermediate,
            week: 2,
            drill_id: "get-underhook",
            name: "Underhook and Come to Knees",
            duration: 240,
            partner: true,
            video: Some("https://youtube.com/watch?v=pW2YL_n8Q_U"),
            instructions: [
                "From half guard bottom",
                "Fight for underhook",
                "Come up to knees",
                "Partner resists at 60%",
                "Goal: 5 successful underhooks in 4 minutes",
            ],
            focus: [
                "Underhook is the key to half guard",
                "Use it to come to knees",
                "Don't let them get crossface",
            ],
        },
        DrillRow {
            id: "half-week3-sweep",
            position: HalfGuard,
            skill: Advanced,
            week: 3,
            drill_id: "half-guard-sweep",
            name: "Half Guard Sweep Drill",
            duration: 300,
            partner: true,
            video: Some("https://youtube.com/watch?v=zDD2ORNn_yw"),
            instructions: [
                "From half guard with underhook",
                "Execute sweep to top position",
                "Partner actively defends at 70%",
                "5 minute round",
                "Track successful sweeps",
            ],
            focus: [
                "Off-balance before sweep",
                "Use underhook to lift",
                "Come on top in strong position",
            ],
        },
    ];

    rows.into_iter().map(DrillTemplate::from).collect()
}
