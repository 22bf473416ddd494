//! Cache Store Module
//!
//! Main cache engine combining the key index with the recency list.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::cache::{RecencyList, MIN_CAPACITY};

// == LRU Cache ==
/// Fixed-capacity key/value cache that evicts the least recently used entry.
///
/// Two structures carry every entry: a hash index resolving keys to slots,
/// and a recency list ordering those slots from most to least recently
/// touched. Both are updated together on every mutation, so lookup,
/// insertion, removal, and recency promotion are all O(1).
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to recency-list slot index
    index: HashMap<K, usize, RandomState>,
    /// Recency ordering over all stored entries
    list: RecencyList<K, V>,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Requests below [`MIN_CAPACITY`] are silently raised to the floor, so
    /// a zero request still yields a usable cache. Index and arena space are
    /// reserved up front; the cache never holds more than `capacity` entries.
    ///
    /// # Arguments
    /// * `capacity` - Requested maximum number of entries
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity < MIN_CAPACITY {
            debug!(
                "Requested capacity {} is below the floor, using {}",
                capacity, MIN_CAPACITY
            );
            MIN_CAPACITY
        } else {
            capacity
        };

        Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            list: RecencyList::with_capacity(capacity),
            capacity,
        }
    }

    // == Get ==
    /// Retrieves a value by key, promoting its entry to most recently used.
    ///
    /// Reads count as use: a hit re-splices the entry to the front of the
    /// recency order. A miss returns `None` with no side effect.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let index = *self.index.get(key)?;
        self.list.move_to_front(index);
        self.list.value(index)
    }

    // == Get Mut ==
    /// Mutable variant of [`get`](Self::get); same promotion on a hit.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = *self.index.get(key)?;
        self.list.move_to_front(index);
        self.list.value_mut(index)
    }

    // == Peek ==
    /// Retrieves a value by key without touching the recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let index = *self.index.get(key)?;
        self.list.value(index)
    }

    // == Put ==
    /// Stores a key-value pair, evicting the least recently used entry if
    /// the cache is full.
    ///
    /// If the key already exists, its value is replaced in place and the
    /// entry is promoted; no eviction happens and the entry count is
    /// unchanged. A new key on a full cache evicts exactly one entry, the
    /// current least recently used, before insertion. Either way the stored
    /// entry ends up most recently used.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    pub fn put(&mut self, key: K, value: V) {
        // Overwrite case: replace in place, promote, never evict
        if let Some(&index) = self.index.get(&key) {
            if let Some(stored) = self.list.value_mut(index) {
                *stored = value;
            }
            self.list.move_to_front(index);
            return;
        }

        // New key on a full cache: drop the least recently used entry first
        if self.index.len() >= self.capacity {
            if let Some((evicted, _)) = self.list.pop_back() {
                self.index.remove(&evicted);
                trace!(
                    "Cache full at {} entries, evicted least recently used",
                    self.capacity
                );
            }
        }

        let index = self.list.push_front(key.clone(), value);
        self.index.insert(key, index);
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    ///
    /// Removing an absent key is a silent no-op returning `None`. The
    /// relative order of the remaining entries is unaffected.
    ///
    /// # Arguments
    /// * `key` - The key to remove
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.index.remove(key)?;
        self.list.remove(index).map(|(_, value)| value)
    }

    // == Contains ==
    /// Checks key membership without touching the recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Most Recently Used ==
    /// Returns the most recently used entry without altering the order.
    pub fn most_recently_used(&self) -> Option<(&K, &V)> {
        self.list.front()
    }

    // == Least Recently Used ==
    /// Returns the least recently used entry without altering the order.
    pub fn least_recently_used(&self) -> Option<(&K, &V)> {
        self.list.back()
    }

    // == Pop Least Recently Used ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns `None` if the cache is empty.
    pub fn pop_least_recently_used(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.pop_back()?;
        self.index.remove(&key);
        Some((key, value))
    }

    // == Clear ==
    /// Drops every entry; capacity is unchanged and the cache stays usable.
    pub fn clear(&mut self) {
        let dropped = self.index.len();
        self.index.clear();
        self.list.clear();
        debug!("Cache cleared, dropped {} entries", dropped);
    }

    // == Capacity ==
    /// Returns the effective capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
