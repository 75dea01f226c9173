/// Number of questions per listing page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns the 1-based `page` of `items`, at most `page_size` long.
///
/// Pages past the end are empty rather than an error. Page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Reads a page number from a raw query value. Absent or non-numeric input means page 1.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1)
}

/// Whether an empty page should be reported as "not found" to the client.
///
/// An empty first page of an empty collection is a legitimate empty listing;
/// any other empty page asks for something that does not exist.
pub fn is_out_of_range(page_len: usize, page: usize, total: usize) -> bool {
    page_len == 0 && (page > 1 || total > 0)
}
