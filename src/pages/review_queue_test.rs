use super::*;

fn product(id: &str, status: ProductStatus) -> Product {
    Product {
        id: id.to_owned(),
        product_name: "P".to_owned(),
        product_image: "img".to_owned(),
        description: String::new(),
        external_link: None,
        tags: Vec::new(),
        owner_name: String::new(),
        owner_email: "o@x.com".to_owned(),
        owner_image: None,
        status,
        featured: false,
        upvote: 0,
        voted_users: Vec::new(),
        created_at: None,
    }
}

#[test]
fn pending_products_sort_first() {
    let ordered = order_for_review(vec![
        product("a", ProductStatus::Accepted),
        product("b", ProductStatus::Pending),
        product("c", ProductStatus::Rejected),
        product("d", ProductStatus::Pending),
    ]);
    let ids: Vec<&str> = ordered.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "d", "a", "c"]);
}

#[test]
fn order_is_stable_within_groups() {
    let ordered = order_for_review(vec![
        product("x", ProductStatus::Accepted),
        product("y", ProductStatus::Accepted),
    ]);
    let ids: Vec<&str> = ordered.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y"]);
}
