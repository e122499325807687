// ABOUTME: Primary objective text for each (position, mission week) pair
// ABOUTME: Unmapped combinations return None so callers can apply a generic fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::OnceLock;

use apex_core::errors::AppResult;
use apex_core::models::Position;
use serde::{Deserialize, Serialize};

static BUILTIN_TABLE: OnceLock<ObjectiveTable> = OnceLock::new();

/// One row of the objective table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveEntry {
    /// Focal position
    pub position: Position,
    /// Mission week, 1-4
    pub week: u8,
    /// Primary objective text
    pub description: String,
}

/// Lookup table of primary objectives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectiveTable {
    entries: Vec<ObjectiveEntry>,
}

impl ObjectiveTable {
    /// Table with no entries; every lookup misses
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Shared built-in table covering every position for weeks 1-4
    pub fn builtin() -> &'static Self {
        BUILTIN_TABLE.get_or_init(builtin_table)
    }

    /// Parse a table from a JSON array of entries
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the entry shape
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert or replace the objective for a slot
    pub fn insert(&mut self, position: Position, week: u8, description: impl Into<String>) {
        let description = description.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.position == position && entry.week == week)
        {
            entry.description = description;
        } else {
            self.entries.push(ObjectiveEntry {
                position,
                week,
                description,
            });
        }
    }

    /// Objective text for a slot, if mapped
    #[must_use]
    pub fn lookup(&self, position: Position, week: u8) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.position == position && entry.week == week)
            .map(|entry| entry.description.as_str())
    }

    /// Number of mapped slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slot is mapped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn builtin_table() -> ObjectiveTable {
    const ROWS: [(Position, [&str; 4]); 7] = [
        (
            Position::SideControl,
            [
                "Establish inside elbow position within 3 seconds",
                "Create effective frames before opponent settles weight",
                "Complete full hip escape to guard recovery",
                "Chain multiple escape attempts under pressure",
            ],
        ),
        (
            Position::Mount,
            [
                "Trap arm and bridge to create space",
                "Execute elbow escape to half guard",
                "Prevent opponent from advancing to high mount",
                "Escape mount and recover guard position",
            ],
        ),
        (
            Position::Back,
            [
                "Protect neck and prevent choke setup",
                "Clear first hook using proper hand fighting",
                "Escape to turtle or guard position",
                "Counter back take attempts during scrambles",
            ],
        ),
        (
            Position::Guard,
            [
                "Maintain distance and grip control",
                "Recover guard when opponent starts to pass",
                "Use frames to prevent guard pass completion",
                "Retain guard under sustained pressure",
            ],
        ),
        (
            Position::ClosedGuard,
            [
                "Break opponent posture using grips and hips",
                "Set up arm drag or high guard position",
                "Threaten submission to create sweep opportunity",
                "Execute sweep or submission from closed guard",
            ],
        ),
        (
            Position::OpenGuard,
            [
                "Establish strong grips and foot placement",
                "Off-balance opponent using push-pull dynamics",
                "Execute sweep from open guard position",
                "Transition between open guard variations",
            ],
        ),
        (
            Position::HalfGuard,
            [
                "Prevent opponent from flattening you out",
                "Create underhook or get to knees",
                "Execute sweep from half guard",
                "Recover full guard or take top position",
            ],
        ),
    ];

    let mut table = ObjectiveTable::empty();
    for (position, weeks) in ROWS {
        for (week, description) in (1_u8..).zip(weeks) {
            table.insert(position, week, description);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_position_and_week() {
        let table = ObjectiveTable::builtin();
        assert_eq!(table.len(), Position::ALL.len() * 4);
        for position in Position::ALL {
            for week in 1..=4 {
                assert!(table.lookup(position, week).is_some());
            }
            assert!(table.lookup(position, 5).is_none());
        }
    }

    #[test]
    fn test_insert_replaces_existing_slot() {
        let mut table = ObjectiveTable::empty();
        table.insert(Position::Mount, 1, "first");
        table.insert(Position::Mount, 1, "second");
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(Position::Mount, 1), Some("second"));
    }
}
