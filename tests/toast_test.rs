// ABOUTME: Integration tests for the toast notification queue
// ABOUTME: Validates push/dismiss transitions, ordering, and the queue bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use piste::state::toast::{ToastLevel, ToastStore};
use piste_core::constants::limits::MAX_TOASTS;

#[tokio::test]
async fn test_push_and_snapshot_order() {
    let store = ToastStore::new();
    store.push(ToastLevel::Success, "chainring added").await;
    store.push(ToastLevel::Error, "invalid time format").await;

    let toasts = store.toasts().await;
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].message, "chainring added");
    assert_eq!(toasts[1].level, ToastLevel::Error);
    assert!(toasts[0].id < toasts[1].id);
}

#[tokio::test]
async fn test_dismiss_by_id() {
    let store = ToastStore::new();
    let toast = store.push(ToastLevel::Info, "session saved").await;

    assert!(store.dismiss(toast.id).await);
    assert!(!store.dismiss(toast.id).await);
    assert!(store.toasts().await.is_empty());
}

#[tokio::test]
async fn test_queue_is_bounded() {
    let store = ToastStore::new();
    for i in 0..(MAX_TOASTS + 3) {
        store.push(ToastLevel::Info, format!("toast {i}")).await;
    }

    let toasts = store.toasts().await;
    assert_eq!(toasts.len(), MAX_TOASTS);
    // Oldest entries were evicted
    assert_eq!(toasts[0].message, "toast 3");
}
