//! Mini LRU - A lightweight fixed-capacity LRU cache
//!
//! An associative container holding at most a fixed number of key/value
//! pairs; when full, inserting a new key evicts the entry that has gone the
//! longest without being touched. A hash index resolves keys to slots in an
//! arena-backed recency list, so lookup, insertion, removal, and recency
//! promotion are all O(1) and nothing ever scans the whole collection.
//!
//! Reads count as use: [`LruCache::get`] promotes the entry to most recently
//! used, which is why it takes `&mut self`. The cache carries no internal
//! synchronization; callers sharing one instance across threads must wrap it
//! in their own lock, including around reads.
//!
//! # Examples
//!
//! ```
//! use mini_lru::LruCache;
//!
//! // Capacity requests below the floor of 10 are silently raised
//! let mut cache = LruCache::new(4);
//! assert_eq!(cache.capacity(), 10);
//!
//! for key in 1..=10u32 {
//!     cache.put(key, key * 10);
//! }
//!
//! // Reading key 1 shields it from the next eviction
//! assert_eq!(cache.get(&1), Some(&10));
//!
//! // An eleventh key evicts key 2, now the least recently used
//! cache.put(11, 110);
//! assert!(!cache.contains(&2));
//! assert_eq!(cache.len(), 10);
//! ```

#![forbid(unsafe_code)]

pub mod cache;

pub use cache::{LruCache, RecencyList, MIN_CAPACITY};
