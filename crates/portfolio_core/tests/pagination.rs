use portfolio_core::{next_page, paginate, prev_page, total_pages, PageError};

#[test]
fn last_partial_page_is_clipped() {
    let items = (1..=7).collect::<Vec<_>>();
    assert_eq!(paginate(&items, 3, 0).unwrap(), &[1, 2, 3]);
    assert_eq!(paginate(&items, 3, 2).unwrap(), &[7]);
    assert_eq!(total_pages(items.len(), 3).unwrap(), 3);
}

#[test]
fn out_of_range_page_is_empty() {
    let items = (1..=7).collect::<Vec<_>>();
    assert!(paginate(&items, 3, 3).unwrap().is_empty());
    assert!(paginate(&items, 3, usize::MAX).unwrap().is_empty());
}

#[test]
fn empty_items_have_zero_pages() {
    let items: Vec<u8> = Vec::new();
    assert!(paginate(&items, 3, 0).unwrap().is_empty());
    assert_eq!(total_pages(0, 3).unwrap(), 0);
}

#[test]
fn zero_page_size_is_rejected() {
    let items = vec![1, 2, 3];
    assert_eq!(paginate(&items, 0, 0), Err(PageError::InvalidPageSize));
    assert_eq!(total_pages(3, 0), Err(PageError::InvalidPageSize));
}

#[test]
fn pages_concatenate_back_to_items() {
    let items = (0..23).collect::<Vec<_>>();
    for page_size in 1..=25 {
        let pages = total_pages(items.len(), page_size).unwrap();
        let rebuilt = (0..pages)
            .flat_map(|index| paginate(&items, page_size, index).unwrap().to_vec())
            .collect::<Vec<_>>();
        assert_eq!(rebuilt, items, "page_size {page_size}");
    }
}

#[test]
fn navigation_wraps_around() {
    assert_eq!(next_page(2, 3), 0);
    assert_eq!(next_page(0, 3), 1);
    assert_eq!(prev_page(0, 3), 2);
    assert_eq!(prev_page(2, 3), 1);
    assert_eq!(next_page(0, 1), 0);
    assert_eq!(prev_page(0, 1), 0);
}

#[test]
fn navigation_without_pages_stays_at_zero() {
    assert_eq!(next_page(0, 0), 0);
    assert_eq!(prev_page(0, 0), 0);
}
