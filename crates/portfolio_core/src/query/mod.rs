//! Catalog query engine.
//!
//! # Responsibility
//! - Filter projects by free-text search and by category.
//! - Split the featured showcase from the regular listing.
//! - Slice filtered results into pages and navigate between them.
//!
//! # Invariants
//! - Every function is pure: inputs are borrowed, outputs are new sequences.
//! - Filters are stable: output order always follows input order.
//! - Search and category filters commute.
//! - Only `page_size == 0` is an error; all other inputs have defined output.

pub mod filter;
pub mod page;
