// ABOUTME: Storage abstraction layer for the Piste platform
// ABOUTME: Provider trait over profiles, gears, lap sessions, and lap times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

//! Storage abstraction
//!
//! The remote relational backend is an external collaborator; this trait
//! is the narrow contract the application layer programs against. The
//! in-memory backend is the reference implementation used by tests and
//! the CLI.

use async_trait::async_trait;
use piste_core::errors::AppResult;
use piste_core::models::{
    EventType, Gear, GearKind, GearUpdate, LapSession, LapSessionDetails, LapTime, NewGear,
    NewLapSession, ProfileUpdate, UserProfile,
};
use uuid::Uuid;

pub mod memory;

pub use memory::MemoryStorage;

/// Core storage abstraction trait
///
/// All storage implementations must implement this trait to provide a
/// consistent interface for the application layer.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    // ================================
    // Profiles
    // ================================

    /// Get a rider profile by id
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Insert or replace a rider profile
    async fn upsert_profile(&self, profile: &UserProfile) -> AppResult<()>;

    /// Apply a partial update to an existing profile
    async fn update_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> AppResult<UserProfile>;

    // ================================
    // Gear components
    // ================================

    /// Create a new chainring or sprocket record
    async fn create_gear(&self, user_id: Uuid, gear: &NewGear) -> AppResult<Gear>;

    /// List a rider's gear of one kind, ordered by teeth ascending
    async fn list_gears(&self, user_id: Uuid, kind: GearKind) -> AppResult<Vec<Gear>>;

    /// Get a gear record by id
    async fn get_gear(&self, gear_id: Uuid) -> AppResult<Option<Gear>>;

    /// Apply a partial update to a gear record
    async fn update_gear(&self, gear_id: Uuid, update: &GearUpdate) -> AppResult<Gear>;

    /// Toggle the favorite flag on a gear record
    async fn set_gear_favorite(&self, gear_id: Uuid, is_favorite: bool) -> AppResult<Gear>;

    /// Delete a gear record
    async fn delete_gear(&self, gear_id: Uuid) -> AppResult<()>;

    // ================================
    // Lap sessions
    // ================================

    /// Create a session together with its lap times (1-based lap numbers)
    async fn create_session(
        &self,
        user_id: Uuid,
        session: &NewLapSession,
        lap_times_ms: &[u64],
    ) -> AppResult<LapSession>;

    /// List a rider's sessions with details, newest session first,
    /// optionally filtered by event type
    async fn list_sessions(
        &self,
        user_id: Uuid,
        event_filter: Option<EventType>,
    ) -> AppResult<Vec<LapSessionDetails>>;

    /// Get one session with its gear records and ordered laps resolved
    async fn get_session(&self, session_id: Uuid) -> AppResult<Option<LapSessionDetails>>;

    /// Delete a session and its lap times
    async fn delete_session(&self, session_id: Uuid) -> AppResult<()>;

    // ================================
    // Lap times
    // ================================

    /// List a session's lap times ordered by lap number
    async fn list_lap_times(&self, session_id: Uuid) -> AppResult<Vec<LapTime>>;

    // ================================
    // Stats
    // ================================

    /// Total number of sessions recorded by a rider
    async fn count_sessions(&self, user_id: Uuid) -> AppResult<usize>;
}
