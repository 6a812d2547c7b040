//! Catalog use-case service.
//!
//! # Responsibility
//! - Serve the project listing (search + category + page) in one call.
//! - Serve the featured showcase, category tabs and detail pages.
//!
//! # Invariants
//! - Listing applies search first, then category filter, then paging.
//! - Service never mutates the catalog it reads.
//! - Logs carry counts and flags only, never query text.

use crate::catalog::store::Catalog;
use crate::model::project::Project;
use crate::query::filter::{
    filter_by_category, partition_featured, search, FeaturedPartition, ALL_CATEGORIES,
};
use crate::query::page::{paginate, total_pages, PageError};
use log::debug;

/// Page size used when a listing query does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 6;
/// Maximum number of related projects on a detail page.
pub const RELATED_LIMIT: usize = 3;

/// Listing request from a presentation screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    /// Free-text search term; `None` or blank disables search.
    pub search: Option<String>,
    /// Category id; `None` behaves like `"all"`.
    pub category: Option<String>,
    /// Defaults to [`DEFAULT_PAGE_SIZE`]. `Some(0)` is rejected.
    pub page_size: Option<usize>,
    /// Zero-based page index.
    pub page_index: usize,
}

impl ProjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_page(mut self, page_index: usize, page_size: usize) -> Self {
        self.page_index = page_index;
        self.page_size = Some(page_size);
        self
    }
}

/// One page of listing results plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPage<'a> {
    pub items: Vec<&'a Project>,
    pub page_index: usize,
    /// Effective page size after defaulting.
    pub page_size: usize,
    /// Number of projects matching search + category before paging.
    pub total_items: usize,
    pub total_pages: usize,
}

/// Detail page projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail<'a> {
    pub project: &'a Project,
    /// Up to [`RELATED_LIMIT`] projects sharing a tag, in catalog order.
    pub related: Vec<&'a Project>,
}

/// Catalog service facade over one immutable catalog.
pub struct CatalogService<'c> {
    catalog: &'c Catalog,
}

impl<'c> CatalogService<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this service reads from.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Lists one page of projects matching the query.
    ///
    /// # Errors
    /// - `PageError::InvalidPageSize` when `page_size` is `Some(0)`.
    pub fn list_projects(&self, query: &ProjectQuery) -> Result<ProjectPage<'c>, PageError> {
        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let term = query.search.as_deref().unwrap_or("");
        let category = query.category.as_deref().unwrap_or(ALL_CATEGORIES);

        let matched = filter_by_category(search(self.catalog, term), category);
        let total_pages = total_pages(matched.len(), page_size)?;
        let items = paginate(&matched, page_size, query.page_index)?.to_vec();

        debug!(
            "event=projects_list module=service status=ok search_len={} category_filter={} page_index={} page_size={} total_items={} total_pages={} returned={}",
            term.trim().chars().count(),
            category != ALL_CATEGORIES,
            query.page_index,
            page_size,
            matched.len(),
            total_pages,
            items.len()
        );

        Ok(ProjectPage {
            items,
            page_index: query.page_index,
            page_size,
            total_items: matched.len(),
            total_pages,
        })
    }

    /// Featured/regular split of the full catalog.
    pub fn showcase(&self) -> FeaturedPartition<'c> {
        let partition = partition_featured(self.catalog);
        debug!(
            "event=showcase module=service status=ok featured={} regular={}",
            partition.featured.len(),
            partition.regular.len()
        );
        partition
    }

    /// Resolves a detail page, or `None` for unknown ids.
    pub fn project_detail(&self, id: &str) -> Option<ProjectDetail<'c>> {
        let Some(project) = self.catalog.get_by_id(id) else {
            debug!("event=project_detail module=service status=not_found");
            return None;
        };
        let related = self.catalog.related(id, RELATED_LIMIT);
        debug!(
            "event=project_detail module=service status=ok related={}",
            related.len()
        );
        Some(ProjectDetail { project, related })
    }

    /// Category tabs: `"all"` followed by the catalog's distinct tags.
    pub fn categories(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.catalog.tags())
            .collect()
    }
}
