// ABOUTME: Shared helpers for integration tests
// ABOUTME: Seeded storage, stub identity provider, and record factories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use chrono::{Duration, Utc};
use piste::state::auth::{AuthSession, AuthUser, IdentityProvider};
use piste::storage::{MemoryStorage, StorageProvider};
use piste_core::errors::{AppError, AppResult};
use piste_core::models::{GearKind, NewGear, UserProfile};
use std::sync::Mutex;
use uuid::Uuid;

pub fn test_user_id() -> Uuid {
    Uuid::new_v4()
}

pub fn test_profile(user_id: Uuid) -> UserProfile {
    UserProfile::new(user_id, "Test Rider", "rider@example.com")
}

pub async fn seeded_storage(user_id: Uuid) -> MemoryStorage {
    let storage = MemoryStorage::new();
    storage.upsert_profile(&test_profile(user_id)).await.unwrap();
    storage
}

pub async fn add_gear(
    storage: &MemoryStorage,
    user_id: Uuid,
    kind: GearKind,
    teeth: u32,
    is_favorite: bool,
) -> Uuid {
    let gear = storage
        .create_gear(
            user_id,
            &NewGear {
                is_favorite,
                ..NewGear::with_teeth(kind, teeth)
            },
        )
        .await
        .unwrap();
    gear.id
}

/// Identity provider stub with a scriptable session and failure mode
pub struct StubIdentity {
    session: Mutex<Option<AuthSession>>,
    pub fail_sign_out: bool,
}

impl StubIdentity {
    pub fn signed_out() -> Self {
        Self {
            session: Mutex::new(None),
            fail_sign_out: false,
        }
    }

    pub fn signed_in(user_id: Uuid) -> Self {
        let user = AuthUser {
            id: user_id,
            email: "rider@example.com".into(),
        };
        Self {
            session: Mutex::new(Some(AuthSession {
                user,
                access_token: "test-token".into(),
                expires_at: Utc::now() + Duration::hours(1),
            })),
            fail_sign_out: false,
        }
    }
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn current_session(&self) -> AppResult<Option<AuthSession>> {
        Ok(self.session.lock().unwrap().clone())
    }

    async fn sign_out(&self) -> AppResult<()> {
        if self.fail_sign_out {
            return Err(AppError::auth_invalid("provider unavailable"));
        }
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
