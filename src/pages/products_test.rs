use super::*;

#[test]
fn prev_page_stops_at_one() {
    assert_eq!(prev_page(3), 2);
    assert_eq!(prev_page(1), 1);
}

#[test]
fn next_page_increments() {
    assert_eq!(next_page(1), 2);
}

#[test]
fn page_size_matches_listing_grid() {
    assert_eq!(PRODUCTS_PER_PAGE, 6);
}
