// ABOUTME: Auth and profile application-state container
// ABOUTME: Explicit state transitions over the identity and storage collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

//! Auth/profile state container
//!
//! Holds the signed-in user, their session, and their rider profile as one
//! snapshot, mutated only through named transition operations
//! (`initialize`, `set_user`, `set_session`, `fetch_profile`,
//! `update_profile`, `sign_out`). The identity provider itself is an
//! external collaborator behind the [`IdentityProvider`] trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use piste_core::errors::{AppError, AppResult};
use piste_core::models::{ProfileUpdate, UserProfile};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::storage::StorageProvider;

/// Authenticated user identity supplied by the external provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    /// Stable user identifier
    pub id: Uuid,
    /// Email address registered with the provider
    pub email: String,
}

/// An authenticated session supplied by the external provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// The session's user
    pub user: AuthUser,
    /// Opaque access token
    pub access_token: String,
    /// Session expiry
    pub expires_at: DateTime<Utc>,
}

/// External identity/session collaborator
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Get the current session, if one exists
    async fn current_session(&self) -> AppResult<Option<AuthSession>>;

    /// Terminate the current session with the provider
    async fn sign_out(&self) -> AppResult<()>;
}

/// One snapshot of the auth/profile state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// Signed-in user, if any
    pub user: Option<AuthUser>,
    /// Active session, if any
    pub session: Option<AuthSession>,
    /// Loaded rider profile, if any
    pub profile: Option<UserProfile>,
    /// Whether an initialize call is in flight
    pub is_loading: bool,
    /// Last transition error, if any
    pub error: Option<String>,
}

/// Auth/profile state container
pub struct AuthStore<S, I> {
    storage: S,
    identity: I,
    state: RwLock<AuthState>,
}

impl<S, I> AuthStore<S, I>
where
    S: StorageProvider,
    I: IdentityProvider,
{
    /// Create a container with empty state
    pub fn new(storage: S, identity: I) -> Self {
        Self {
            storage,
            identity,
            state: RwLock::new(AuthState::default()),
        }
    }

    /// Snapshot the current state
    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Pull the current session from the identity provider and load the
    /// rider's profile
    ///
    /// # Errors
    /// Returns the underlying error after recording it in the state
    /// snapshot; `is_loading` is cleared either way.
    pub async fn initialize(&self) -> AppResult<()> {
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
        }
        let result = self.initialize_inner().await;
        let mut state = self.state.write().await;
        state.is_loading = false;
        if let Err(err) = &result {
            warn!(error = %err, "auth initialization failed");
            state.error = Some(err.to_string());
        }
        drop(state);
        result
    }

    async fn initialize_inner(&self) -> AppResult<()> {
        let session = self.identity.current_session().await?;
        if let Some(session) = session {
            debug!(user_id = %session.user.id, "session restored");
            {
                let mut state = self.state.write().await;
                state.user = Some(session.user.clone());
                state.session = Some(session);
            }
            self.fetch_profile().await?;
        }
        Ok(())
    }

    /// Replace the signed-in user
    pub async fn set_user(&self, user: Option<AuthUser>) {
        self.state.write().await.user = user;
    }

    /// Replace the active session
    pub async fn set_session(&self, session: Option<AuthSession>) {
        self.state.write().await.session = session;
    }

    /// Replace the loaded profile
    pub async fn set_profile(&self, profile: Option<UserProfile>) {
        self.state.write().await.profile = profile;
    }

    /// Load the signed-in user's profile from storage
    ///
    /// A no-op when nobody is signed in; a missing profile record leaves
    /// the profile unset (the onboarding flow creates it later).
    ///
    /// # Errors
    /// Returns storage errors unchanged
    pub async fn fetch_profile(&self) -> AppResult<()> {
        let user = self.state.read().await.user.clone();
        let Some(user) = user else {
            return Ok(());
        };
        let profile = self.storage.get_profile(user.id).await?;
        self.state.write().await.profile = profile;
        Ok(())
    }

    /// Apply a partial update to the signed-in user's profile
    ///
    /// # Errors
    /// Returns `AuthRequired` when nobody is signed in or no profile is
    /// loaded; storage errors are recorded in the state and propagated.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> AppResult<UserProfile> {
        let user = {
            let state = self.state.read().await;
            if state.profile.is_none() {
                return Err(AppError::auth_required());
            }
            state.user.clone().ok_or_else(AppError::auth_required)?
        };
        match self.storage.update_profile(user.id, update).await {
            Ok(profile) => {
                self.state.write().await.profile = Some(profile.clone());
                Ok(profile)
            }
            Err(err) => {
                self.state.write().await.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Sign out with the identity provider and clear the snapshot
    ///
    /// # Errors
    /// Provider errors are recorded in the state and propagated; local
    /// state is only cleared after the provider confirms.
    pub async fn sign_out(&self) -> AppResult<()> {
        if let Err(err) = self.identity.sign_out().await {
            self.state.write().await.error = Some(err.to_string());
            return Err(err);
        }
        let mut state = self.state.write().await;
        state.user = None;
        state.session = None;
        state.profile = None;
        Ok(())
    }
}
