// ABOUTME: Event type enumeration for track cycling sessions
// ABOUTME: Defines the supported disciplines with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of track cycling disciplines
///
/// Covers the events a lap session can be tagged with. The set is fixed;
/// unknown strings are a parse failure rather than a catch-all variant,
/// so sessions can always be grouped by a known discipline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Match sprint over two or three laps
    Sprint,
    /// Individual pursuit over 3-4km
    IndividualPursuit,
    /// Four-rider team pursuit
    TeamPursuit,
    /// Motor-paced sprint finish
    Keirin,
    /// Two-rider relay points race
    Madison,
    /// Multi-event competition
    Omnium,
    /// Points race with intermediate sprints
    PointsRace,
    /// Last rider over the line is eliminated
    EliminationRace,
    /// First across the line wins
    ScratchRace,
    /// Derny-paced endurance event
    DernyPace,
    /// Single flying lap against the clock
    FlyingLap,
    /// Standing-start time trial
    TimeTrial,
}

impl EventType {
    /// All supported disciplines, in display order
    pub const ALL: [Self; 12] = [
        Self::Sprint,
        Self::IndividualPursuit,
        Self::TeamPursuit,
        Self::Keirin,
        Self::Madison,
        Self::Omnium,
        Self::PointsRace,
        Self::EliminationRace,
        Self::ScratchRace,
        Self::DernyPace,
        Self::FlyingLap,
        Self::TimeTrial,
    ];

    /// Create `EventType` from its internal snake_case string
    #[must_use]
    pub fn from_internal_string(internal_name: &str) -> Option<Self> {
        match internal_name {
            "sprint" => Some(Self::Sprint),
            "individual_pursuit" => Some(Self::IndividualPursuit),
            "team_pursuit" => Some(Self::TeamPursuit),
            "keirin" => Some(Self::Keirin),
            "madison" => Some(Self::Madison),
            "omnium" => Some(Self::Omnium),
            "points_race" => Some(Self::PointsRace),
            "elimination_race" => Some(Self::EliminationRace),
            "scratch_race" => Some(Self::ScratchRace),
            "derny_pace" => Some(Self::DernyPace),
            "flying_lap" => Some(Self::FlyingLap),
            "time_trial" => Some(Self::TimeTrial),
            _ => None,
        }
    }

    /// Get the human-readable name for this discipline
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Sprint => "Sprint",
            Self::IndividualPursuit => "Individual Pursuit",
            Self::TeamPursuit => "Team Pursuit",
            Self::Keirin => "Keirin",
            Self::Madison => "Madison",
            Self::Omnium => "Omnium",
            Self::PointsRace => "Points Race",
            Self::EliminationRace => "Elimination Race",
            Self::ScratchRace => "Scratch Race",
            Self::DernyPace => "Derny Pace",
            Self::FlyingLap => "Flying Lap",
            Self::TimeTrial => "Time Trial",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_twelve_disciplines() {
        assert_eq!(EventType::ALL.len(), 12);
    }

    #[test]
    fn test_internal_string_round_trip() {
        for event in EventType::ALL {
            let json = serde_json::to_string(&event).unwrap();
            let internal = json.trim_matches('"');
            assert_eq!(EventType::from_internal_string(internal), Some(event));
        }
    }

    #[test]
    fn test_unknown_discipline_is_rejected() {
        assert_eq!(EventType::from_internal_string("bmx_race"), None);
        assert_eq!(EventType::from_internal_string(""), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(EventType::IndividualPursuit.to_string(), "Individual Pursuit");
        assert_eq!(EventType::FlyingLap.to_string(), "Flying Lap");
    }
}
