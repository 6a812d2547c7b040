//! Pagination over filtered results.
//!
//! Page indexes are zero-based. Navigation wraps around the total page count.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Pagination precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// `page_size` must be at least 1.
    InvalidPageSize,
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageSize => write!(f, "page size must be a positive integer"),
        }
    }
}

impl Error for PageError {}

/// Number of pages needed for `len` items; `0` when there are no items.
pub fn total_pages(len: usize, page_size: usize) -> Result<usize, PageError> {
    ensure_page_size(page_size)?;
    Ok(len.div_ceil(page_size))
}

/// Returns items `[page_index * page_size, (page_index + 1) * page_size)`.
///
/// The range is clipped to `items`; a page past the end is empty.
pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> Result<&[T], PageError> {
    ensure_page_size(page_size)?;
    let Some(start) = page_index.checked_mul(page_size) else {
        return Ok(&[]);
    };
    if start >= items.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(page_size).min(items.len());
    Ok(&items[start..end])
}

/// Page after `current`, wrapping from the last page to `0`.
///
/// Returns `0` when there are no pages.
pub fn next_page(current: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 0;
    }
    (current % total_pages + 1) % total_pages
}

/// Page before `current`, wrapping from `0` to the last page.
///
/// Returns `0` when there are no pages.
pub fn prev_page(current: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 0;
    }
    match current % total_pages {
        0 => total_pages - 1,
        index => index - 1,
    }
}

fn ensure_page_size(page_size: usize) -> Result<(), PageError> {
    if page_size == 0 {
        return Err(PageError::InvalidPageSize);
    }
    Ok(())
}
