//! Project catalog store.
//!
//! # Responsibility
//! - Hold the immutable, ordered list of projects for the process lifetime.
//! - Reject invalid or duplicate-id records at load time.
//! - Expose read-only lookups used by listing and detail views.
//!
//! # Invariants
//! - Catalog order is declaration order and never changes after load.
//! - Project ids are unique within one catalog.
//! - No lookup mutates the catalog; every result is a derived sequence.

mod builtin;
pub mod store;

pub use builtin::{builtin_catalog, BUILTIN_CATALOG_JSON};
