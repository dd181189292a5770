use super::*;

#[test]
fn validate_product_input_accepts_complete_form() {
    let input = validate_product_input(
        " Widget ",
        "https://img.example/w.png",
        "A useful widget.",
        "",
        "ai, tools",
    )
    .expect("valid input");
    assert_eq!(input.name, "Widget");
    assert_eq!(input.tags, vec!["ai", "tools"]);
    assert_eq!(input.external_link, None);
}

#[test]
fn validate_product_input_keeps_external_link_when_present() {
    let input = validate_product_input(
        "Widget",
        "https://img.example/w.png",
        "Desc",
        " https://widget.example ",
        "tools",
    )
    .expect("valid input");
    assert_eq!(input.external_link, Some("https://widget.example".to_owned()));
}

#[test]
fn validate_product_input_requires_core_fields() {
    assert!(validate_product_input("", "img", "desc", "", "tag").is_err());
    assert!(validate_product_input("name", "", "desc", "", "tag").is_err());
    assert!(validate_product_input("name", "img", "", "", "tag").is_err());
}

#[test]
fn validate_product_input_requires_a_tag() {
    assert_eq!(
        validate_product_input("name", "img", "desc", "", "  ,  "),
        Err("Add at least one tag.")
    );
}
