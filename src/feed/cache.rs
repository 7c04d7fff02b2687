use crate::feed::{DatasetSource, Document, FeedError};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

/// A fetched document together with the moment it was fetched.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub fetched_at: DateTime<Utc>,
    pub document: Arc<Document>,
    loaded: Instant,
}

impl Snapshot {
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.loaded)
    }
}

/// Time-boxed snapshot of the upstream dataset.
///
/// Reads of the slot never wait on the network: a miss takes the separate
/// `refill` lock, so only one fetch is in flight and requests queued behind it
/// share its outcome, success or failure. With a zero TTL every call goes to
/// the source.
pub struct DatasetStore {
    source: Box<dyn DatasetSource>,
    ttl: Duration,
    slot: RwLock<Option<Snapshot>>,
    refill: Mutex<Option<FeedError>>,
    attempts: AtomicU64,
}

impl DatasetStore {
    pub fn new(source: Box<dyn DatasetSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: RwLock::new(None),
            refill: Mutex::new(None),
            attempts: AtomicU64::new(0),
        }
    }

    pub fn current(&self) -> Result<Snapshot, FeedError> {
        self.current_at(Instant::now())
    }

    /// Returns the cached snapshot if it is younger than the TTL at `now`,
    /// otherwise fetches a new one. A failed fetch leaves the slot untouched.
    pub fn current_at(&self, now: Instant) -> Result<Snapshot, FeedError> {
        if self.ttl.is_zero() {
            return self.load(now);
        }

        if let Some(snapshot) = self.fresh(now) {
            tracing::debug!(fetched_at = %snapshot.fetched_at, "dataset cache hit");
            return Ok(snapshot);
        }

        let seen = self.attempts.load(Ordering::Acquire);
        // A poisoned lock only means another handler panicked mid-fetch;
        // the guarded value is always complete.
        let mut last_error = self.refill.lock().unwrap_or_else(|e| e.into_inner());

        if self.attempts.load(Ordering::Acquire) != seen {
            // Someone else fetched while we queued; take their outcome.
            if let Some(snapshot) = self.fresh(now) {
                return Ok(snapshot);
            }
            if let Some(err) = last_error.as_ref() {
                return Err(err.clone());
            }
        }

        tracing::debug!("dataset cache miss");
        let result = self.load(now);
        match &result {
            Ok(snapshot) => {
                *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(snapshot.clone());
                *last_error = None;
            }
            Err(err) => *last_error = Some(err.clone()),
        }
        self.attempts.fetch_add(1, Ordering::Release);
        result
    }

    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        if slot.take().is_some() {
            tracing::info!("dataset snapshot invalidated");
        }
    }

    /// The cached snapshot, if any, without fetching.
    pub fn peek(&self) -> Option<Snapshot> {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn fresh(&self, now: Instant) -> Option<Snapshot> {
        self.peek().filter(|snapshot| snapshot.age(now) < self.ttl)
    }

    fn load(&self, now: Instant) -> Result<Snapshot, FeedError> {
        let document = self.source.fetch_dataset().inspect_err(|e| {
            tracing::warn!(error = %e, transport = e.is_fetch(), "dataset fetch failed");
        })?;

        Ok(Snapshot {
            fetched_at: Utc::now(),
            document: Arc::new(document),
            loaded: now,
        })
    }
}
