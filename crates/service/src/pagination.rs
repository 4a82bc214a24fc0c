//! Page slicing over ordered, already-formatted question lists.

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice `items` down to the 1-based `page`. Out-of-range pages yield an
/// empty slice rather than an error; list handlers treat that as not-found.
pub fn paginate<T: Clone>(page: u32, items: &[T]) -> Vec<T> {
    let page = page.max(1);
    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

/// Parse a `page` query value. Missing, unparseable, or zero input falls
/// back to the first page.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}
