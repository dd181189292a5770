use super::*;

#[test]
fn role_endpoint_formats_expected_path() {
    assert_eq!(role_endpoint("a@x.com"), "/users/role/a@x.com");
}

#[test]
fn accepted_products_endpoint_carries_search_and_paging() {
    assert_eq!(
        accepted_products_endpoint("ai tools", 2, 6),
        "/accepted-products?search=ai%20tools&page=2&limit=6"
    );
}

#[test]
fn my_products_endpoint_encodes_email() {
    assert_eq!(my_products_endpoint("a+b@x.com"), "/products?email=a%2Bb@x.com");
}

#[test]
fn product_endpoints_format_expected_paths() {
    assert_eq!(product_endpoint("p1"), "/product/p1");
    assert_eq!(upvote_endpoint("p1"), "/upvote/p1");
    assert_eq!(reviews_endpoint("p1"), "/reviews/p1");
    assert_eq!(report_endpoint("p1"), "/report/p1");
}

#[test]
fn encode_query_escapes_reserved_characters() {
    assert_eq!(encode_query("a&b #c?"), "a%26b%20%23c%3F");
    assert_eq!(encode_query("50%"), "50%25");
}

#[test]
fn encode_query_passes_plain_values_through() {
    assert_eq!(encode_query("widgets"), "widgets");
}

#[test]
fn federated_sign_in_url_targets_backend() {
    assert!(federated_sign_in_url().ends_with("/auth/federated"));
}
