//! Domain model for portfolio catalog entries.
//!
//! # Responsibility
//! - Define the canonical project record rendered by listing and detail views.
//! - Keep record-level validation next to the data shape.
//!
//! # Invariants
//! - Every project is identified by a stable slug `ProjectId`.
//! - Records are plain values; catalogs never mutate them after load.

pub mod project;
