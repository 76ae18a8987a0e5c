//! Page slicing for result lists.
//!
//! Pagination is a read-only view over an ordered list: the slicer never
//! copies or reorders, and out-of-range pages are an empty view rather
//! than an error.

/// Results shown per page when the caller does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns the visible subset of `items` for a 1-based `page`.
///
/// The slice is `[(page - 1) * page_size, page * page_size)` clipped to the
/// list's bounds. Pages past the end - and page 0, which is outside the
/// 1-based contract - yield an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(page_index) = page.checked_sub(1) else {
        return &[];
    };
    let Some(start) = page_index.checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `len` items, `page_size` at a time.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// True when navigation controls are worth showing: the list does not fit
/// on a single page.
#[must_use]
pub fn needs_pagination(len: usize, page_size: usize) -> bool {
    len > page_size
}
