// ABOUTME: Core data models for the Piste platform
// ABOUTME: Profiles, gear components, lap sessions, and lap times with partial-update types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

//! Core data models
//!
//! Record types owned by the persistence collaborator. The calculation
//! engine only borrows the numeric fields (`teeth`, `wheel_diameter_mm`,
//! `time_ms`) for the duration of one calculation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{gearing, track};

/// Track cycling event type enumeration
pub mod event;

pub use event::EventType;

/// Rider profile with preferences consumed as calculator defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Unique profile identifier (matches the identity provider's user id)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Age in years, if shared
    pub age: Option<u16>,
    /// Preferred track length in meters
    pub default_track_length_m: u32,
    /// Preferred wheel diameter in millimeters
    pub wheel_diameter_mm: f64,
    /// Master switch for anonymous data sharing
    pub share_data_enabled: bool,
    /// Share age with the community
    pub share_age: bool,
    /// Share lap times with the community
    pub share_lap_times: bool,
    /// Share gear ratios with the community
    pub share_gear_ratios: bool,
    /// Whether onboarding has been completed
    pub onboarding_completed: bool,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
    /// Last profile modification time
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile with default preferences
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age: None,
            default_track_length_m: track::DEFAULT_TRACK_LENGTH_M,
            wheel_diameter_mm: gearing::DEFAULT_WHEEL_DIAMETER_MM,
            share_data_enabled: false,
            share_age: false,
            share_lap_times: false,
            share_gear_ratios: false,
            onboarding_completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial profile update; fields left `None` are unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    pub name: Option<String>,
    /// New age in years
    pub age: Option<u16>,
    /// New preferred track length in meters
    pub default_track_length_m: Option<u32>,
    /// New preferred wheel diameter in millimeters
    pub wheel_diameter_mm: Option<f64>,
    /// New master data-sharing switch
    pub share_data_enabled: Option<bool>,
    /// New age-sharing flag
    pub share_age: Option<bool>,
    /// New lap-time-sharing flag
    pub share_lap_times: Option<bool>,
    /// New gear-ratio-sharing flag
    pub share_gear_ratios: Option<bool>,
    /// New onboarding flag
    pub onboarding_completed: Option<bool>,
}

impl ProfileUpdate {
    /// Apply this update to a profile, bumping `updated_at`
    pub fn apply(&self, profile: &mut UserProfile) {
        if let Some(name) = &self.name {
            profile.name.clone_from(name);
        }
        if let Some(age) = self.age {
            profile.age = Some(age);
        }
        if let Some(length) = self.default_track_length_m {
            profile.default_track_length_m = length;
        }
        if let Some(diameter) = self.wheel_diameter_mm {
            profile.wheel_diameter_mm = diameter;
        }
        if let Some(enabled) = self.share_data_enabled {
            profile.share_data_enabled = enabled;
        }
        if let Some(share) = self.share_age {
            profile.share_age = share;
        }
        if let Some(share) = self.share_lap_times {
            profile.share_lap_times = share;
        }
        if let Some(share) = self.share_gear_ratios {
            profile.share_gear_ratios = share;
        }
        if let Some(done) = self.onboarding_completed {
            profile.onboarding_completed = done;
        }
        profile.updated_at = Utc::now();
    }
}

/// Which end of the drivetrain a gear component sits on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GearKind {
    /// Front gear attached to the crank
    Chainring,
    /// Rear gear (fixed, single-speed track setup)
    Sprocket,
}

impl GearKind {
    /// Human-readable name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Chainring => "chainring",
            Self::Sprocket => "sprocket",
        }
    }

    /// Documented inclusive teeth range accepted by input forms
    #[must_use]
    pub const fn teeth_range(&self) -> (u32, u32) {
        match self {
            Self::Chainring => (gearing::MIN_CHAINRING_TEETH, gearing::MAX_CHAINRING_TEETH),
            Self::Sprocket => (gearing::MIN_SPROCKET_TEETH, gearing::MAX_SPROCKET_TEETH),
        }
    }
}

/// A chainring or sprocket owned by a rider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gear {
    /// Unique record identifier
    pub id: Uuid,
    /// Owning rider
    pub user_id: Uuid,
    /// Drivetrain position
    pub kind: GearKind,
    /// Teeth count
    pub teeth: u32,
    /// Manufacturer, if recorded
    pub brand: Option<String>,
    /// Purchase date, if recorded
    pub purchase_date: Option<NaiveDate>,
    /// Marked as a favorite in the UI
    pub is_favorite: bool,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new gear component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGear {
    /// Drivetrain position
    pub kind: GearKind,
    /// Teeth count
    pub teeth: u32,
    /// Manufacturer
    pub brand: Option<String>,
    /// Purchase date
    pub purchase_date: Option<NaiveDate>,
    /// Favorite flag
    pub is_favorite: bool,
}

impl NewGear {
    /// Insert payload with only the required fields set
    #[must_use]
    pub const fn with_teeth(kind: GearKind, teeth: u32) -> Self {
        Self {
            kind,
            teeth,
            brand: None,
            purchase_date: None,
            is_favorite: false,
        }
    }
}

/// Partial gear update; fields left `None` are unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GearUpdate {
    /// New teeth count
    pub teeth: Option<u32>,
    /// New manufacturer
    pub brand: Option<String>,
    /// New purchase date
    pub purchase_date: Option<NaiveDate>,
    /// New favorite flag
    pub is_favorite: Option<bool>,
}

impl GearUpdate {
    /// Apply this update to a gear record
    pub fn apply(&self, gear: &mut Gear) {
        if let Some(teeth) = self.teeth {
            gear.teeth = teeth;
        }
        if let Some(brand) = &self.brand {
            gear.brand = Some(brand.clone());
        }
        if let Some(date) = self.purchase_date {
            gear.purchase_date = Some(date);
        }
        if let Some(favorite) = self.is_favorite {
            gear.is_favorite = favorite;
        }
    }
}

/// One timed outing on a track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LapSession {
    /// Unique session identifier
    pub id: Uuid,
    /// Owning rider
    pub user_id: Uuid,
    /// Track discipline for this session
    pub event_type: EventType,
    /// Track name, if recorded
    pub track_name: Option<String>,
    /// Track length in meters
    pub track_length_m: u32,
    /// Chainring used, if recorded
    pub chainring_id: Option<Uuid>,
    /// Sprocket used, if recorded
    pub sprocket_id: Option<Uuid>,
    /// Free-form notes
    pub notes: Option<String>,
    /// When the session took place
    pub session_date: DateTime<Utc>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new lap session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLapSession {
    /// Track discipline
    pub event_type: EventType,
    /// Track name
    pub track_name: Option<String>,
    /// Track length in meters
    pub track_length_m: u32,
    /// Chainring used
    pub chainring_id: Option<Uuid>,
    /// Sprocket used
    pub sprocket_id: Option<Uuid>,
    /// Free-form notes
    pub notes: Option<String>,
    /// When the session took place
    pub session_date: DateTime<Utc>,
}

impl NewLapSession {
    /// Insert payload with only the required fields set
    #[must_use]
    pub fn for_event(event_type: EventType) -> Self {
        Self {
            event_type,
            track_name: None,
            track_length_m: track::DEFAULT_TRACK_LENGTH_M,
            chainring_id: None,
            sprocket_id: None,
            notes: None,
            session_date: Utc::now(),
        }
    }
}

/// One recorded lap within a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LapTime {
    /// Unique record identifier
    pub id: Uuid,
    /// Owning session
    pub session_id: Uuid,
    /// 1-based lap position within the session
    pub lap_number: u32,
    /// Lap duration in milliseconds
    pub time_ms: u64,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// A lap session with its gear records and ordered lap times resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LapSessionDetails {
    /// The session record
    pub session: LapSession,
    /// Resolved chainring, when `chainring_id` is set and still exists
    pub chainring: Option<Gear>,
    /// Resolved sprocket, when `sprocket_id` is set and still exists
    pub sprocket: Option<Gear>,
    /// Lap times ordered by `lap_number`
    pub laps: Vec<LapTime>,
}

impl LapSessionDetails {
    /// Lap durations in milliseconds, in lap order
    #[must_use]
    pub fn lap_times_ms(&self) -> Vec<u64> {
        self.laps.iter().map(|lap| lap.time_ms).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_uses_documented_defaults() {
        let profile = UserProfile::new(Uuid::new_v4(), "Test Rider", "rider@example.com");
        assert_eq!(profile.default_track_length_m, 250);
        assert!((profile.wheel_diameter_mm - 668.0).abs() < f64::EPSILON);
        assert!(!profile.onboarding_completed);
    }

    #[test]
    fn test_profile_update_only_touches_set_fields() {
        let mut profile = UserProfile::new(Uuid::new_v4(), "Test Rider", "rider@example.com");
        let before = profile.clone();
        let update = ProfileUpdate {
            wheel_diameter_mm: Some(700.0),
            onboarding_completed: Some(true),
            ..ProfileUpdate::default()
        };
        update.apply(&mut profile);
        assert!((profile.wheel_diameter_mm - 700.0).abs() < f64::EPSILON);
        assert!(profile.onboarding_completed);
        assert_eq!(profile.name, before.name);
        assert_eq!(profile.default_track_length_m, before.default_track_length_m);
        assert!(profile.updated_at >= before.updated_at);
    }

    #[test]
    fn test_gear_kind_teeth_ranges() {
        assert_eq!(GearKind::Chainring.teeth_range(), (30, 70));
        assert_eq!(GearKind::Sprocket.teeth_range(), (10, 25));
    }

    #[test]
    fn test_lap_times_ms_preserves_order() {
        let session_id = Uuid::new_v4();
        let laps: Vec<LapTime> = [18_200_u64, 17_950, 18_430]
            .iter()
            .enumerate()
            .map(|(i, &time_ms)| LapTime {
                id: Uuid::new_v4(),
                session_id,
                lap_number: u32::try_from(i).unwrap_or(0) + 1,
                time_ms,
                created_at: Utc::now(),
            })
            .collect();
        let details = LapSessionDetails {
            session: LapSession {
                id: session_id,
                user_id: Uuid::new_v4(),
                event_type: EventType::FlyingLap,
                track_name: None,
                track_length_m: 250,
                chainring_id: None,
                sprocket_id: None,
                notes: None,
                session_date: Utc::now(),
                created_at: Utc::now(),
            },
            chainring: None,
            sprocket: None,
            laps,
        };
        assert_eq!(details.lap_times_ms(), vec![18_200, 17_950, 18_430]);
    }
}
