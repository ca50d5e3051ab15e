//! Page arithmetic over a filtered view. Pages are 1-based.

pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn is_valid_page(page: usize, total_pages: usize) -> bool {
    (1..=total_pages.max(1)).contains(&page)
}

/// Slice `[(page-1)*page_size, page*page_size)` clamped to `items`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages.max(1)).collect()
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
