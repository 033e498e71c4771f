//! Reference list caching.
//!
//! This module provides the `ReferenceCache` holding the target, equipment
//! and body part vocabularies in memory, with helpers to mirror them to
//! JSON files on disk and load them back. There is no expiry: an entry
//! lives until it is overwritten or the cache is dropped.

pub mod manager;

pub use manager::ReferenceCache;
