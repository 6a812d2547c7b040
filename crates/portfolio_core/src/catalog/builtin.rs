//! The site's own catalog, compiled into the binary.

use super::store::{Catalog, CatalogResult};
use log::{error, info};
use once_cell::sync::OnceCell;

/// Raw JSON source of the built-in catalog.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/projects.json");

static BUILTIN_CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Returns the built-in catalog, parsing it on first use.
///
/// # Errors
/// - Returns the load error when the embedded JSON is invalid. A failed
///   load is not cached, so the next call retries.
pub fn builtin_catalog() -> CatalogResult<&'static Catalog> {
    BUILTIN_CATALOG.get_or_try_init(|| {
        let loaded = Catalog::from_json_str(BUILTIN_CATALOG_JSON);
        match &loaded {
            Ok(catalog) => info!(
                "event=catalog_load module=catalog status=ok source=builtin projects={}",
                catalog.len()
            ),
            Err(err) => error!(
                "event=catalog_load module=catalog status=error source=builtin error={}",
                err
            ),
        }
        loaded
    })
}
