use super::*;

#[test]
fn plain_user_sees_only_base_items() {
    let items = menu_items(Some(Role::User));
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.href.starts_with("/dashboard/")));
}

#[test]
fn unresolved_role_sees_only_base_items() {
    assert_eq!(menu_items(None).len(), 3);
}

#[test]
fn moderator_sees_review_leaves() {
    let items = menu_items(Some(Role::Moderator));
    assert!(items.iter().any(|i| i.href == "/dashboard/productReviewQueue"));
    assert!(items.iter().any(|i| i.href == "/dashboard/reportedContents"));
    assert!(!items.iter().any(|i| i.href == "/dashboard/manageUsers"));
}

#[test]
fn admin_sees_admin_leaves_but_not_moderator_leaves() {
    let items = menu_items(Some(Role::Admin));
    assert!(items.iter().any(|i| i.href == "/dashboard/statistics"));
    assert!(items.iter().any(|i| i.href == "/dashboard/manageUsers"));
    assert!(items.iter().any(|i| i.href == "/dashboard/manageCoupons"));
    // One enumerated role per subject: admin does not inherit the
    // moderator queue.
    assert!(!items.iter().any(|i| i.href == "/dashboard/productReviewQueue"));
}
