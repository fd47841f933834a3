use crypto_listing_wasm::domain::pagination::{PAGE_SIZE, Paginator};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn total_pages_is_ceiling(len: u16) -> bool {
    let len = len as usize;
    Paginator::default().total_pages(len) == (len + PAGE_SIZE - 1) / PAGE_SIZE
}

#[quickcheck]
fn every_page_but_the_last_is_full(len: u8, page: u8) -> bool {
    let items: Vec<u8> = (0..len).collect();
    let mut paginator = Paginator::default();
    let total = paginator.total_pages(items.len());
    if !paginator.go_to_page(page as usize, items.len()) {
        return paginator.page() == 1;
    }
    let slice = paginator.slice(&items);
    let expected = if paginator.page() < total {
        PAGE_SIZE
    } else if items.len() % PAGE_SIZE == 0 {
        PAGE_SIZE
    } else {
        items.len() % PAGE_SIZE
    };
    slice.len() == expected && slice.first() == items.get((paginator.page() - 1) * PAGE_SIZE)
}

#[quickcheck]
fn out_of_range_requests_are_ignored(len: u8) -> bool {
    let len = len as usize;
    let mut paginator = Paginator::default();
    let total = paginator.total_pages(len);
    !paginator.go_to_page(0, len) && !paginator.go_to_page(total + 1, len) && paginator.page() == 1
}

#[test]
fn twelve_items_walkthrough() {
    let items: Vec<u32> = (0..12).collect();
    let mut paginator = Paginator::default();

    assert_eq!(paginator.page(), 1);
    assert_eq!(paginator.slice(&items), &items[0..5]);

    assert!(paginator.go_to_page(3, items.len()));
    assert_eq!(paginator.slice(&items), &items[10..12]);

    assert!(!paginator.go_to_page(4, items.len()));
    assert_eq!(paginator.page(), 3);
}

#[test]
fn prev_and_next_stop_at_bounds() {
    let mut paginator = Paginator::default();
    assert!(!paginator.prev(12));
    assert!(paginator.next(12));
    assert!(paginator.next(12));
    assert!(!paginator.next(12));
    assert_eq!(paginator.page(), 3);
    assert!(paginator.has_prev());
    assert!(!paginator.has_next(12));
}
