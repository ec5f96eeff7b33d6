use std::ops::Range;

/// Number of pages needed for `total` items, `ceil(total / per_page)`
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Indices shown on 1-based `page`: `[per_page * (page - 1), per_page * page)` clipped to `total`
pub fn page_range(total: usize, page: usize, per_page: usize) -> Range<usize> {
    let start = per_page.saturating_mul(page.saturating_sub(1)).min(total);
    let end = per_page.saturating_mul(page).min(total);
    start..end
}

/// Keep `page` inside `1..=page_count`, falling back to 1 for an empty list
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}
