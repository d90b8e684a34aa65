// ABOUTME: Rider statistics aggregation over the storage provider
// ABOUTME: Computes session, gear, combo, and favorite counts for the home screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

use piste_core::errors::AppResult;
use piste_core::models::GearKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::StorageProvider;

/// Headline numbers for a rider's home screen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStats {
    /// Lap sessions recorded
    pub total_sessions: usize,
    /// Chainrings owned
    pub total_chainrings: usize,
    /// Sprockets owned
    pub total_sprockets: usize,
    /// Distinct chainring/sprocket combinations available
    pub total_gear_combos: usize,
    /// Gear records marked favorite, both kinds combined
    pub total_favorites: usize,
}

/// Compute a rider's headline statistics
///
/// # Errors
/// Returns storage errors unchanged
pub async fn user_stats<S: StorageProvider>(storage: &S, user_id: Uuid) -> AppResult<UserStats> {
    let chainrings = storage.list_gears(user_id, GearKind::Chainring).await?;
    let sprockets = storage.list_gears(user_id, GearKind::Sprocket).await?;
    let total_sessions = storage.count_sessions(user_id).await?;

    let favorites = |gears: &[piste_core::models::Gear]| {
        gears.iter().filter(|gear| gear.is_favorite).count()
    };

    Ok(UserStats {
        total_sessions,
        total_chainrings: chainrings.len(),
        total_sprockets: sprockets.len(),
        total_gear_combos: chainrings.len() * sprockets.len(),
        total_favorites: favorites(&chainrings) + favorites(&sprockets),
    })
}
