//! Bounded memoization cache.
//!
//! ## Key Types
//!
//! - `LruCache`: generic bounded cache evicting the least-recently-accessed
//!   entry
//!
//! The catalog store owns an `LruCache<CardId, Card>` so card value objects
//! are constructed once and reused; the cache is injected there as an
//! explicit dependency, never held in a process-global.

pub mod lru;

pub use lru::LruCache;
