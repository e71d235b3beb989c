//! # quillint_cache
//!
//! Caching system for Quillint.
//!
//! This crate provides the pieces that let a run reuse prior work:
//!
//! 1. **Stable hashing**: deterministic, cross-process hashes over a
//!    canonical serialized form, used for the lines/config/check channels
//! 2. **Cache records**: the persisted outcome of matching one file
//! 3. **Cache store**: one JSON record per file, keyed by the hash of the
//!    file identity, written atomically
//!
//! ## Storage
//!
//! Records are human-readable JSON, the same codec family as the
//! configuration system, so the records can be inspected with the same
//! tooling. Writes go to a temporary file and are renamed into place; the
//! last writer to complete the rename wins cleanly.

mod error;
mod hash;
mod record;
mod store;

pub use error::CacheError;
pub use hash::{hash_hex, stable_hash};
pub use record::CacheRecord;
pub use store::{CacheLookup, CacheStore};
