/// Page size of the 3x3 listing grid.
pub const DEFAULT_PAGE_SIZE: usize = 9;
/// Page links shown at once in the pager.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Items on the 1-based `page`. Out-of-range pages give an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Contiguous page numbers to show in the pager, keeping `current_page` in view.
///
/// With a window of 10 the current page sits fifth from the left until the
/// window hits the last page.
pub fn page_window(current_page: usize, total_pages: usize, window_size: usize) -> Vec<usize> {
    if total_pages == 0 || window_size == 0 {
        return Vec::new();
    }
    let lead = (window_size - 1) / 2;
    let latest_start = total_pages.saturating_sub(window_size - 1).max(1);
    let start = current_page.saturating_sub(lead).min(latest_start).max(1);
    let end = total_pages.min(start + window_size - 1);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_partial_page() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 3, 9), &items[18..25]);
        assert_eq!(paginate(&items, 1, 9).len(), 9);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 4, 9).is_empty());
        assert!(paginate(&items, 0, 9).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert!(paginate::<u32>(&[], 1, 9).is_empty());
    }

    #[test]
    fn page_counts() {
        assert_eq!(total_pages(25, 9), 3);
        assert_eq!(total_pages(27, 9), 3);
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn window_slides_with_current_page() {
        assert_eq!(page_window(7, 20, 10), (3..=12).collect::<Vec<_>>());
        assert_eq!(page_window(1, 20, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(page_window(5, 20, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(page_window(19, 20, 10), (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn window_shorter_than_limit() {
        assert_eq!(page_window(2, 3, 10), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1, 10), vec![1]);
        assert!(page_window(1, 0, 10).is_empty());
    }
}
