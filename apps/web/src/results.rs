//! Short-lived store for search results.
//!
//! A search stores its record under a fresh id and redirects to
//! `/search-result?id=...`. Entries expire after the TTL and the oldest entry
//! is evicted once capacity is reached. Nothing is persisted.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::resume::ResumeRecord;

struct StoredResult {
    record: ResumeRecord,
    stored_at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<Uuid, StoredResult>,
    /// Insertion order, oldest first.
    order: VecDeque<Uuid>,
}

#[derive(Clone)]
pub struct ResultStore {
    inner: Arc<Mutex<Inner>>,
    ttl: Duration,
    capacity: usize,
}

impl ResultStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn insert(&self, record: ResumeRecord) -> Uuid {
        self.insert_at(record, Utc::now())
    }

    pub fn get(&self, id: &Uuid) -> Option<ResumeRecord> {
        self.get_at(id, Utc::now())
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    fn insert_at(&self, record: ResumeRecord, now: DateTime<Utc>) -> Uuid {
        let mut inner = self.lock();

        // Same TTL for every entry, so expired ones are always at the front.
        while let Some(oldest) = inner.order.front().copied() {
            let expired = inner
                .entries
                .get(&oldest)
                .map_or(true, |e| now - e.stored_at >= self.ttl);
            if !expired && inner.entries.len() < self.capacity {
                break;
            }
            inner.order.pop_front();
            inner.entries.remove(&oldest);
        }

        let id = Uuid::new_v4();
        inner.entries.insert(
            id,
            StoredResult {
                record,
                stored_at: now,
            },
        );
        inner.order.push_back(id);
        id
    }

    fn get_at(&self, id: &Uuid, now: DateTime<Utc>) -> Option<ResumeRecord> {
        let mut inner = self.lock();
        let stored = inner.entries.get(id)?;
        if now - stored.stored_at < self.ttl {
            return Some(stored.record.clone());
        }

        inner.entries.remove(id);
        inner.order.retain(|k| k != id);
        None
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock leaves the maps consistent; keep serving.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
