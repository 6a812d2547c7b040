//! Core domain logic for the portfolio site.
//! This crate is the single source of truth for catalog and query invariants.

pub mod catalog;
pub mod contact;
pub mod logging;
pub mod model;
pub mod offline;
pub mod query;
pub mod service;

pub use catalog::builtin_catalog;
pub use catalog::store::{Catalog, CatalogError, CatalogResult};
pub use contact::form::{submit_contact, ContactForm, SubmissionReceipt};
pub use contact::throttle::{MemoryThrottleStore, ThrottlePolicy, ThrottleState, ThrottleStore};
pub use contact::ContactError;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectId, ProjectValidationError};
pub use offline::asset_cache::{
    AssetCachePolicy, AssetCacheStorage, AssetNetwork, AssetResponse, AssetSource, FetchError,
    MemoryCacheStorage, OfflineError, ServedAsset,
};
pub use query::filter::{
    filter_by_category, partition_featured, search, FeaturedPartition, ALL_CATEGORIES,
    FEATURED_LIMIT,
};
pub use query::page::{next_page, paginate, prev_page, total_pages, PageError};
pub use service::catalog_service::{
    CatalogService, ProjectDetail, ProjectPage, ProjectQuery, DEFAULT_PAGE_SIZE, RELATED_LIMIT,
};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{builtin_catalog, core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = builtin_catalog().unwrap();
        assert!(!catalog.is_empty());
    }
}
