//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with LRU eviction.

mod list;
mod store;


// Re-export public types
pub use list::RecencyList;
pub use store::LruCache;

// == Public Constants ==
/// Minimum effective capacity; construction raises smaller requests to this floor
pub const MIN_CAPACITY: usize = 10;
