// ABOUTME: Integration tests for the rider statistics service
// ABOUTME: Validates counts, combinations, and favorites over seeded storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use piste::services::stats::{user_stats, UserStats};
use piste::storage::{MemoryStorage, StorageProvider};
use piste_core::models::{EventType, GearKind, NewLapSession};

#[tokio::test]
async fn test_empty_rider_has_zero_stats() {
    let storage = MemoryStorage::new();
    let stats = user_stats(&storage, common::test_user_id()).await.unwrap();
    assert_eq!(stats, UserStats::default());
}

#[tokio::test]
async fn test_stats_aggregate_gears_and_sessions() {
    let user_id = common::test_user_id();
    let storage = common::seeded_storage(user_id).await;

    common::add_gear(&storage, user_id, GearKind::Chainring, 48, true).await;
    common::add_gear(&storage, user_id, GearKind::Chainring, 50, false).await;
    common::add_gear(&storage, user_id, GearKind::Chainring, 52, false).await;
    common::add_gear(&storage, user_id, GearKind::Sprocket, 14, true).await;
    common::add_gear(&storage, user_id, GearKind::Sprocket, 15, false).await;

    storage
        .create_session(
            user_id,
            &NewLapSession::for_event(EventType::ScratchRace),
            &[19_000, 18_500],
        )
        .await
        .unwrap();

    let stats = user_stats(&storage, user_id).await.unwrap();
    assert_eq!(stats.total_sessions, 1);
    assert_eq!(stats.total_chainrings, 3);
    assert_eq!(stats.total_sprockets, 2);
    assert_eq!(stats.total_gear_combos, 6);
    assert_eq!(stats.total_favorites, 2);
}

#[tokio::test]
async fn test_stats_are_scoped_to_the_rider() {
    let user_id = common::test_user_id();
    let other_id = common::test_user_id();
    let storage = common::seeded_storage(user_id).await;

    common::add_gear(&storage, user_id, GearKind::Chainring, 50, false).await;
    common::add_gear(&storage, other_id, GearKind::Chainring, 46, true).await;

    let stats = user_stats(&storage, user_id).await.unwrap();
    assert_eq!(stats.total_chainrings, 1);
    assert_eq!(stats.total_favorites, 0);
}
