//! Core use-case services.
//!
//! # Responsibility
//! - Compose catalog lookups and query functions into screen-level APIs.
//! - Keep presentation layers free of filter/paging ordering rules.

pub mod catalog_service;
