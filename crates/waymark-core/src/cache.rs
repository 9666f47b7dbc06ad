//! Expiring cache for comparison results.
//!
//! [`DeltaCache`] is an explicit object owned by whoever needs it (the MCP
//! server keeps one per process). Entries are keyed by a truncated SHA-256
//! of both roadmaps, expire after a TTL, and the oldest entry is evicted
//! when the cache is full. Time comes from a [`Clock`] so tests can drive
//! expiry with a [`ManualClock`].
//!
//! ```rust
//! use waymark_core::{cache::{CacheConfig, DeltaCache}, diff::CompareOptions, models::Roadmap};
//!
//! let mut cache = DeltaCache::new(CacheConfig::default());
//! let roadmap = Roadmap::default();
//! let delta = cache.get_or_compute(&roadmap, &roadmap, &CompareOptions::default())?;
//! assert!(delta.is_empty());
//! assert_eq!(cache.len(), 1);
//! # Ok::<(), waymark_core::WaymarkError>(())
//! ```

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use jiff::{SignedDuration, Timestamp};
use log::debug;
use sha2::{Digest, Sha256};

use crate::{
    diff::{compare_roadmaps_with, CompareOptions, RoadmapDelta, TaskMatching},
    error::Result,
    models::Roadmap,
};

/// Number of hex characters kept from the content hash.
const KEY_LENGTH: usize = 16;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward (or backward for negative durations).
    pub fn advance(&self, by: SignedDuration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        if let Ok(next) = now.checked_add(by) {
            *now = next;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Capacity and lifetime of cached comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries; 0 disables caching
    pub capacity: usize,
    /// How long an entry stays valid after insertion
    pub ttl: SignedDuration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            ttl: SignedDuration::from_mins(10),
        }
    }
}

/// Content key for a comparison of `older` against `newer`.
///
/// # Errors
///
/// Returns `WaymarkError::Serialization` if either roadmap cannot be
/// encoded as JSON.
pub fn cache_key(older: &Roadmap, newer: &Roadmap, options: &CompareOptions) -> Result<String> {
    let mode = match options.task_matching {
        TaskMatching::Presence => "presence",
        TaskMatching::Multiset => "multiset",
    };

    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(older)?);
    hasher.update(b"\n");
    hasher.update(serde_json::to_vec(newer)?);
    hasher.update(b"\n");
    hasher.update(mode.as_bytes());

    let mut key = hex::encode(hasher.finalize());
    key.truncate(KEY_LENGTH);
    Ok(key)
}

struct CacheEntry {
    delta: RoadmapDelta,
    inserted_at: Timestamp,
}

/// TTL- and capacity-bounded cache of [`RoadmapDelta`] values.
pub struct DeltaCache<C: Clock = SystemClock> {
    config: CacheConfig,
    clock: C,
    entries: HashMap<String, CacheEntry>,
}

impl DeltaCache<SystemClock> {
    /// Create a cache driven by the wall clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> DeltaCache<C> {
    /// Create a cache driven by the given clock.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached delta for `key` if it has not expired.
    pub fn get(&mut self, key: &str) -> Option<RoadmapDelta> {
        let now = self.clock.now();
        let expired = self
            .entries
            .get(key)
            .map(|entry| self.is_expired(entry, now))?;

        if expired {
            debug!("cache entry {key} expired");
            self.entries.remove(key);
            return None;
        }

        self.entries.get(key).map(|entry| entry.delta.clone())
    }

    /// Store a delta, evicting expired entries and then the oldest entry
    /// when the cache is full.
    pub fn insert(&mut self, key: String, delta: RoadmapDelta) {
        if self.config.capacity == 0 {
            return;
        }

        let now = self.clock.now();
        self.purge_expired(now);

        if self.entries.len() >= self.config.capacity && !self.entries.contains_key(&key) {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                debug!("evicting cache entry {oldest}");
                self.entries.remove(&oldest);
            }
        }

        self.entries.insert(
            key,
            CacheEntry {
                delta,
                inserted_at: now,
            },
        );
    }

    /// Compare through the cache.
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::Serialization` if the cache key cannot be built.
    pub fn get_or_compute(
        &mut self,
        older: &Roadmap,
        newer: &Roadmap,
        options: &CompareOptions,
    ) -> Result<RoadmapDelta> {
        let key = cache_key(older, newer, options)?;
        if let Some(delta) = self.get(&key) {
            debug!("cache hit for {key}");
            return Ok(delta);
        }

        debug!("cache miss for {key}");
        let delta = compare_roadmaps_with(older, newer, options);
        self.insert(key, delta.clone());
        Ok(delta)
    }

    /// Number of stored entries, including ones that expired but were not
    /// yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn is_expired(&self, entry: &CacheEntry, now: Timestamp) -> bool {
        now.duration_since(entry.inserted_at) >= self.config.ttl
    }

    fn purge_expired(&mut self, now: Timestamp) {
        let ttl = self.config.ttl;
        self.entries.retain(|_, entry| now.duration_since(entry.inserted_at) < ttl);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::Phase;

    fn roadmap(summary: &str) -> Roadmap {
        Roadmap {
            summary: summary.to_string(),
            phases: vec![Phase {
                name: "P".to_string(),
                description: "d".to_string(),
                duration: "1w".to_string(),
                priority: "low".to_string(),
                dependencies: None,
                tasks: vec!["t".to_string()],
            }],
            generated_date: None,
        }
    }

    fn start() -> Timestamp {
        Timestamp::from_second(1640995200).unwrap()
    }

    fn cache_with(capacity: usize, clock: Arc<ManualClock>) -> DeltaCache<Arc<ManualClock>> {
        DeltaCache::with_clock(
            CacheConfig {
                capacity,
                ttl: SignedDuration::from_secs(60),
            },
            clock,
        )
    }

    #[test]
    fn test_cache_key_is_truncated_and_stable() {
        let a = roadmap("a");
        let b = roadmap("b");
        let options = CompareOptions::default();

        let key = cache_key(&a, &b, &options).unwrap();
        assert_eq!(key.len(), KEY_LENGTH);
        assert_eq!(key, cache_key(&a, &b, &options).unwrap());
        // Direction and matching mode are part of the key
        assert_ne!(key, cache_key(&b, &a, &options).unwrap());
        assert_ne!(key, cache_key(&a, &b, &CompareOptions::multiset()).unwrap());
    }

    #[test]
    fn test_get_or_compute_hits_cache() {
        let clock = Arc::new(ManualClock::new(start()));
        let mut cache = cache_with(4, clock);
        let a = roadmap("a");
        let b = roadmap("b");

        let first = cache
            .get_or_compute(&a, &b, &CompareOptions::default())
            .unwrap();
        assert!(first.summary_changed);
        assert_eq!(cache.len(), 1);

        let second = cache
            .get_or_compute(&a, &b, &CompareOptions::default())
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_entries_expire_after_ttl() {
        let clock = Arc::new(ManualClock::new(start()));
        let mut cache = cache_with(4, clock.clone());
        let a = roadmap("a");
        let key = cache_key(&a, &a, &CompareOptions::default()).unwrap();
        cache.insert(key.clone(), compare_roadmaps_with(&a, &a, &CompareOptions::default()));

        clock.advance(SignedDuration::from_secs(59));
        assert!(cache.get(&key).is_some());

        clock.advance(SignedDuration::from_secs(1));
        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_oldest_entry_is_evicted_at_capacity() {
        let clock = Arc::new(ManualClock::new(start()));
        let mut cache = cache_with(2, clock.clone());
        let delta = compare_roadmaps_with(&roadmap("a"), &roadmap("a"), &CompareOptions::default());

        cache.insert("first".to_string(), delta.clone());
        clock.advance(SignedDuration::from_secs(1));
        cache.insert("second".to_string(), delta.clone());
        clock.advance(SignedDuration::from_secs(1));
        cache.insert("third".to_string(), delta);

        assert_eq!(cache.len(), 2);
        assert!(cache.get("first").is_none());
        assert!(cache.get("second").is_some());
        assert!(cache.get("third").is_some());
    }

    #[test]
    fn test_zero_capacity_disables_caching() {
        let clock = Arc::new(ManualClock::new(start()));
        let mut cache = cache_with(0, clock);
        let a = roadmap("a");

        cache
            .get_or_compute(&a, &a, &CompareOptions::default())
            .unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear_empties_cache() {
        let mut cache = DeltaCache::new(CacheConfig::default());
        let a = roadmap("a");
        cache
            .get_or_compute(&a, &a, &CompareOptions::default())
            .unwrap();
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
