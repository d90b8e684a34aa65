// ABOUTME: In-memory storage backend for tests and local tooling
// ABOUTME: HashMap-based reference implementation of the StorageProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

use async_trait::async_trait;
use chrono::Utc;
use piste_core::errors::{AppError, AppResult};
use piste_core::models::{
    EventType, Gear, GearKind, GearUpdate, LapSession, LapSessionDetails, LapTime, NewGear,
    NewLapSession, ProfileUpdate, UserProfile,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::StorageProvider;

#[derive(Debug, Default)]
struct Inner {
    profiles: HashMap<Uuid, UserProfile>,
    gears: HashMap<Uuid, Gear>,
    sessions: HashMap<Uuid, LapSession>,
    laps: HashMap<Uuid, Vec<LapTime>>,
}

/// In-memory reference backend
///
/// Cloning shares the underlying store, matching the connection-handle
/// semantics of a real database client.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn session_details(&self, session: &LapSession) -> LapSessionDetails {
        let resolve = |id: Option<Uuid>| id.and_then(|gear_id| self.gears.get(&gear_id).cloned());
        let mut laps = self.laps.get(&session.id).cloned().unwrap_or_default();
        laps.sort_by_key(|lap| lap.lap_number);
        LapSessionDetails {
            session: session.clone(),
            chainring: resolve(session.chainring_id),
            sprocket: resolve(session.sprocket_id),
            laps,
        }
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.inner.read().await.profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> AppResult<()> {
        self.inner
            .write()
            .await
            .profiles
            .insert(profile.id, profile.clone());
        Ok(())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> AppResult<UserProfile> {
        let mut inner = self.inner.write().await;
        let profile = inner.profiles.get_mut(&user_id).ok_or_else(|| {
            AppError::not_found("profile").with_resource_id(user_id.to_string())
        })?;
        update.apply(profile);
        Ok(profile.clone())
    }

    async fn create_gear(&self, user_id: Uuid, gear: &NewGear) -> AppResult<Gear> {
        let record = Gear {
            id: Uuid::new_v4(),
            user_id,
            kind: gear.kind,
            teeth: gear.teeth,
            brand: gear.brand.clone(),
            purchase_date: gear.purchase_date,
            is_favorite: gear.is_favorite,
            created_at: Utc::now(),
        };
        debug!(gear_id = %record.id, kind = ?record.kind, teeth = record.teeth, "gear created");
        self.inner.write().await.gears.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_gears(&self, user_id: Uuid, kind: GearKind) -> AppResult<Vec<Gear>> {
        let inner = self.inner.read().await;
        let mut gears: Vec<Gear> = inner
            .gears
            .values()
            .filter(|gear| gear.user_id == user_id && gear.kind == kind)
            .cloned()
            .collect();
        gears.sort_by_key(|gear| gear.teeth);
        Ok(gears)
    }

    async fn get_gear(&self, gear_id: Uuid) -> AppResult<Option<Gear>> {
        Ok(self.inner.read().await.gears.get(&gear_id).cloned())
    }

    async fn update_gear(&self, gear_id: Uuid, update: &GearUpdate) -> AppResult<Gear> {
        let mut inner = self.inner.write().await;
        let gear = inner
            .gears
            .get_mut(&gear_id)
            .ok_or_else(|| AppError::not_found("gear").with_resource_id(gear_id.to_string()))?;
        update.apply(gear);
        Ok(gear.clone())
    }

    async fn set_gear_favorite(&self, gear_id: Uuid, is_favorite: bool) -> AppResult<Gear> {
        self.update_gear(
            gear_id,
            &GearUpdate {
                is_favorite: Some(is_favorite),
                ..GearUpdate::default()
            },
        )
        .await
    }

    async fn delete_gear(&self, gear_id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .gears
            .remove(&gear_id)
            .ok_or_else(|| AppError::not_found("gear").with_resource_id(gear_id.to_string()))?;
        Ok(())
    }

    async fn create_session(
        &self,
        user_id: Uuid,
        session: &NewLapSession,
        lap_times_ms: &[u64],
    ) -> AppResult<LapSession> {
        let record = LapSession {
            id: Uuid::new_v4(),
            user_id,
            event_type: session.event_type,
            track_name: session.track_name.clone(),
            track_length_m: session.track_length_m,
            chainring_id: session.chainring_id,
            sprocket_id: session.sprocket_id,
            notes: session.notes.clone(),
            session_date: session.session_date,
            created_at: Utc::now(),
        };
        let laps: Vec<LapTime> = lap_times_ms
            .iter()
            .enumerate()
            .map(|(i, &time_ms)| LapTime {
                id: Uuid::new_v4(),
                session_id: record.id,
                lap_number: i as u32 + 1,
                time_ms,
                created_at: Utc::now(),
            })
            .collect();
        debug!(
            session_id = %record.id,
            event = %record.event_type,
            laps = laps.len(),
            "session created"
        );
        let mut inner = self.inner.write().await;
        inner.sessions.insert(record.id, record.clone());
        inner.laps.insert(record.id, laps);
        Ok(record)
    }

    async fn list_sessions(
        &self,
        user_id: Uuid,
        event_filter: Option<EventType>,
    ) -> AppResult<Vec<LapSessionDetails>> {
        let inner = self.inner.read().await;
        let mut sessions: Vec<&LapSession> = inner
            .sessions
            .values()
            .filter(|session| {
                session.user_id == user_id
                    && event_filter.is_none_or(|event| session.event_type == event)
            })
            .collect();
        sessions.sort_by(|a, b| b.session_date.cmp(&a.session_date));
        Ok(sessions
            .into_iter()
            .map(|session| inner.session_details(session))
            .collect())
    }

    async fn get_session(&self, session_id: Uuid) -> AppResult<Option<LapSessionDetails>> {
        let inner = self.inner.read().await;
        Ok(inner
            .sessions
            .get(&session_id)
            .map(|session| inner.session_details(session)))
    }

    async fn delete_session(&self, session_id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.sessions.remove(&session_id).ok_or_else(|| {
            AppError::not_found("lap session").with_resource_id(session_id.to_string())
        })?;
        inner.laps.remove(&session_id);
        Ok(())
    }

    async fn list_lap_times(&self, session_id: Uuid) -> AppResult<Vec<LapTime>> {
        let inner = self.inner.read().await;
        let mut laps = inner.laps.get(&session_id).cloned().unwrap_or_default();
        laps.sort_by_key(|lap| lap.lap_number);
        Ok(laps)
    }

    async fn count_sessions(&self, user_id: Uuid) -> AppResult<usize> {
        let inner = self.inner.read().await;
        Ok(inner
            .sessions
            .values()
            .filter(|session| session.user_id == user_id)
            .count())
    }
}
