//! In-memory correlation store implementation
//!
//! This module provides the process-local store correlating authorization
//! redirects to their callbacks:
//! - entries expire a fixed window after creation, checked on lookup
//! - a capacity cap drops the oldest pending entry once reached
//! - `evict` is idempotent
//!
//! The store is purely in-memory and lost on restart; a callback arriving
//! after a restart observes an absent entry.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use vr_core::domain::entities::VerificationRequest;
use vr_core::services::flow::CorrelationStore;

/// Default time-to-live for pending requests (10 minutes)
pub const DEFAULT_TTL_SECONDS: i64 = 600;

/// Default maximum number of pending requests held at once
pub const DEFAULT_CAPACITY: usize = 10_000;

/// In-memory, TTL-bounded correlation store
///
/// Individual operations are atomic behind an async `RwLock`; two callbacks
/// racing on the same state serialize on the lock, and the loser of the
/// final eviction observes absence on its next lookup.
pub struct InMemoryCorrelationStore {
    /// Pending requests keyed by correlation state
    entries: RwLock<HashMap<String, VerificationRequest>>,
    /// Entry lifetime measured from creation
    ttl: Duration,
    /// Capacity cap applied on insert
    capacity: usize,
}

impl InMemoryCorrelationStore {
    /// Create a store with the default TTL and capacity
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_TTL_SECONDS, DEFAULT_CAPACITY)
    }

    /// Create a store with explicit TTL (seconds) and capacity
    pub fn with_settings(ttl_seconds: i64, capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::seconds(ttl_seconds),
            capacity,
        }
    }

    fn is_expired(&self, request: &VerificationRequest) -> bool {
        Utc::now() - request.created_at > self.ttl
    }

    /// Drop every expired entry; returns how many were removed
    fn purge_expired(&self, entries: &mut HashMap<String, VerificationRequest>) -> usize {
        let before = entries.len();
        entries.retain(|_, request| !self.is_expired(request));
        before - entries.len()
    }
}

impl Default for InMemoryCorrelationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CorrelationStore for InMemoryCorrelationStore {
    async fn insert(&self, state: &str, request: VerificationRequest) {
        let mut entries = self.entries.write().await;

        if !entries.contains_key(state) && entries.len() >= self.capacity {
            let purged = self.purge_expired(&mut entries);
            if purged > 0 {
                debug!(purged, "Purged expired correlation entries at capacity");
            }

            // Still full: drop the oldest pending entry to make room
            if entries.len() >= self.capacity {
                if let Some(oldest) = entries
                    .iter()
                    .min_by_key(|(_, request)| request.created_at)
                    .map(|(key, _)| key.clone())
                {
                    warn!(state = %oldest, "Correlation store at capacity, dropping oldest entry");
                    entries.remove(&oldest);
                }
            }
        }

        debug!(state = %state, "Recorded pending verification request");
        entries.insert(state.to_string(), request);
    }

    async fn lookup(&self, state: &str) -> Option<VerificationRequest> {
        {
            let entries = self.entries.read().await;
            match entries.get(state) {
                Some(request) if !self.is_expired(request) => return Some(request.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: evict under the write lock and report absence
        let mut entries = self.entries.write().await;
        if entries.get(state).is_some_and(|request| self.is_expired(request)) {
            debug!(state = %state, "Evicting expired correlation entry on lookup");
            entries.remove(state);
        }
        None
    }

    async fn evict(&self, state: &str) {
        let mut entries = self.entries.write().await;
        if entries.remove(state).is_some() {
            debug!(state = %state, "Evicted correlation entry");
        }
    }
}
