//! Offline asset cache policy.
//!
//! # Responsibility
//! - Describe the site's precache list under a versioned cache name.
//! - Install, activate and serve assets network-first with cache fallback.
//!
//! # Invariants
//! - Install is all-or-nothing: a failed precache writes no entries.
//! - Activation keeps only the cache named by the current policy.
//! - Serving never writes to the cache.

pub mod asset_cache;
