//! Bounded memoizing cache with least-recently-accessed eviction.
//!
//! `LruCache` stores up to `capacity` entries. Every read refreshes the
//! entry's access stamp; when an insert would exceed capacity, the entry
//! with the oldest stamp is evicted first.
//!
//! Eviction scans all entries rather than maintaining a recency queue. The
//! cache is bounded to small sizes, so the scan stays cheap and the table
//! needs no auxiliary bookkeeping.
//!
//! All operations serialize through one exclusive critical section, so
//! concurrent callers observe linearizable get/set behavior.

use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

/// Smallest capacity the cache will operate with.
///
/// Requested capacities below this floor are raised to it.
pub const MIN_CAPACITY: usize = 5;

#[derive(Debug)]
struct Entry<V> {
    value: V,
    /// Logical access stamp; larger means more recently touched.
    stamp: u64,
}

#[derive(Debug)]
struct Table<K, V> {
    entries: FxHashMap<K, Entry<V>>,
    clock: u64,
}

impl<K, V> Table<K, V>
where
    K: Eq + Hash + Clone,
{
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Evict the entry with the oldest access stamp.
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.stamp)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            tracing::trace!("evicting least-recently-accessed cache entry");
            self.entries.remove(&key);
        }
    }
}

/// Generic bounded memoization cache.
///
/// ## Example
///
/// ```
/// use cardex::cache::LruCache;
///
/// let cache: LruCache<u32, String> = LruCache::new(8);
///
/// cache.set(1, "one".to_string());
/// assert_eq!(cache.get(&1), Some("one".to_string()));
/// assert_eq!(cache.get(&2), None);
///
/// let value = cache.get_or_else(2, || Some("two".to_string()));
/// assert_eq!(value, Some("two".to_string()));
/// assert_eq!(cache.len(), 2);
/// ```
#[derive(Debug)]
pub struct LruCache<K, V> {
    inner: Mutex<Table<K, V>>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// Capacities below [`MIN_CAPACITY`] are raised to the floor.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Table {
                entries: FxHashMap::default(),
                clock: 0,
            }),
            capacity: capacity.max(MIN_CAPACITY),
        }
    }

    /// Get the enforced capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table().entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table().entries.is_empty()
    }

    /// Look up a value, refreshing its access stamp.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        let mut table = self.table();
        let stamp = table.tick();
        let entry = table.entries.get_mut(key)?;
        entry.stamp = stamp;
        Some(entry.value.clone())
    }

    /// Look up a value, producing and caching it on a miss.
    ///
    /// On a hit the cached value is returned and its access stamp
    /// refreshed; `produce` is not called. On a miss `produce` runs inside
    /// the critical section; if it returns `Some`, the value is inserted
    /// (evicting first when at capacity) and returned.
    pub fn get_or_else<F>(&self, key: K, produce: F) -> Option<V>
    where
        F: FnOnce() -> Option<V>,
    {
        let mut table = self.table();
        let stamp = table.tick();

        if let Some(entry) = table.entries.get_mut(&key) {
            entry.stamp = stamp;
            return Some(entry.value.clone());
        }

        let value = produce()?;
        if table.entries.len() >= self.capacity {
            table.evict_oldest();
        }
        table.entries.insert(
            key,
            Entry {
                value: value.clone(),
                stamp,
            },
        );
        Some(value)
    }

    /// Insert or replace a value, evicting first when at capacity.
    pub fn set(&self, key: K, value: V) {
        let mut table = self.table();
        let stamp = table.tick();

        if !table.entries.contains_key(&key) && table.entries.len() >= self.capacity {
            table.evict_oldest();
        }
        table.entries.insert(key, Entry { value, stamp });
    }

    fn table(&self) -> MutexGuard<'_, Table<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
