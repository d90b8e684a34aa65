// ABOUTME: Toast notification queue with explicit push/dismiss transitions
// ABOUTME: Bounded list of user-facing notifications with monotonic ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

use chrono::{DateTime, Utc};
use piste_core::constants::limits::MAX_TOASTS;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Toast severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    /// Neutral information
    Info,
    /// Completed action
    Success,
    /// Failed action
    Error,
}

/// One user-facing notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    /// Monotonically increasing identifier
    pub id: u64,
    /// Severity
    pub level: ToastLevel,
    /// Message shown to the user
    pub message: String,
    /// When the toast was raised
    pub created_at: DateTime<Utc>,
}

/// Bounded toast queue
///
/// Pushing beyond the queue bound evicts the oldest toast, so a burst of
/// failures can never grow the list without limit.
#[derive(Debug, Default)]
pub struct ToastStore {
    toasts: RwLock<Vec<Toast>>,
    next_id: AtomicU64,
}

impl ToastStore {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a notification, returning the stored toast
    pub async fn push(&self, level: ToastLevel, message: impl Into<String>) -> Toast {
        let toast = Toast {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            level,
            message: message.into(),
            created_at: Utc::now(),
        };
        let mut toasts = self.toasts.write().await;
        toasts.push(toast.clone());
        if toasts.len() > MAX_TOASTS {
            toasts.remove(0);
        }
        toast
    }

    /// Dismiss a toast by id; returns whether it was present
    pub async fn dismiss(&self, id: u64) -> bool {
        let mut toasts = self.toasts.write().await;
        let before = toasts.len();
        toasts.retain(|toast| toast.id != id);
        toasts.len() != before
    }

    /// Snapshot the queue, oldest first
    pub async fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().await.clone()
    }
}
