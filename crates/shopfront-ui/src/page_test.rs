use super::*;
use crate::ids;

fn select(id: &str, values: &[&str]) -> ElementNode {
    ElementNode::new("select").id(id).children(
        values
            .iter()
            .map(|v| Node::from(ElementNode::new("option").attr("value", *v).text(*v))),
    )
}

#[test]
fn set_text_replaces_existing_children() {
    let mut page = Page::new().with(
        ElementNode::new("span")
            .id(ids::CART_COUNT)
            .text("old")
            .child(ElementNode::new("b").text("stale")),
    );
    page.set_text(ids::CART_COUNT, "3").unwrap();
    assert_eq!(page.text(ids::CART_COUNT).as_deref(), Some("3"));
    assert_eq!(page.to_html(), r#"<span id="cart-count">3</span>"#);
}

#[test]
fn writing_to_missing_element_is_an_error() {
    let mut page = Page::new();
    let err = page.set_text(ids::CART_COUNT, "1").unwrap_err();
    assert!(matches!(err, UiError::MissingElement(ref id) if id == ids::CART_COUNT));
}

#[test]
fn hidden_toggles_attribute() {
    let mut page = Page::new().with(
        ElementNode::new("div")
            .id(ids::ORDER_SUCCESS)
            .attr("hidden", ""),
    );
    assert!(page.is_hidden(ids::ORDER_SUCCESS));
    page.set_hidden(ids::ORDER_SUCCESS, false).unwrap();
    assert!(!page.is_hidden(ids::ORDER_SUCCESS));
    page.set_hidden(ids::ORDER_SUCCESS, true).unwrap();
    assert!(page.is_hidden(ids::ORDER_SUCCESS));
}

#[test]
fn missing_element_counts_as_hidden() {
    assert!(Page::new().is_hidden(ids::ORDER_SUCCESS));
}

#[test]
fn select_value_defaults_to_first_option() {
    let page = Page::new().with(select("variant-select-tee", &["11", "12"]));
    assert_eq!(
        page.control_value("variant-select-tee").as_deref(),
        Some("11")
    );
}

#[test]
fn select_option_changes_control_value() {
    let mut page = Page::new().with(select("variant-select-tee", &["11", "12", "13"]));
    page.select_option("variant-select-tee", "13").unwrap();
    assert_eq!(
        page.control_value("variant-select-tee").as_deref(),
        Some("13")
    );
    page.select_option("variant-select-tee", "12").unwrap();
    assert_eq!(
        page.control_value("variant-select-tee").as_deref(),
        Some("12")
    );
}

#[test]
fn select_option_rejects_unknown_value() {
    let mut page = Page::new().with(select("variant-select-tee", &["11"]));
    let err = page.select_option("variant-select-tee", "99").unwrap_err();
    assert!(matches!(err, UiError::MissingOption { ref value, .. } if value == "99"));
    assert_eq!(
        page.control_value("variant-select-tee").as_deref(),
        Some("11")
    );
}

#[test]
fn empty_select_has_no_value() {
    let page = Page::new().with(select("variant-select-tee", &[]));
    assert_eq!(page.control_value("variant-select-tee"), None);
}

#[test]
fn input_value_round_trips_through_attribute() {
    let mut page = Page::new().with(ElementNode::new("input").id(ids::SEARCH_QUERY));
    assert_eq!(page.control_value(ids::SEARCH_QUERY), None);
    page.set_value(ids::SEARCH_QUERY, "shirt").unwrap();
    assert_eq!(page.control_value(ids::SEARCH_QUERY).as_deref(), Some("shirt"));
}

#[test]
fn attr_reads_data_attributes() {
    let page = Page::new().with(
        ElementNode::new("div")
            .id(ids::REVIEWS_LIST)
            .attr(ids::PRODUCT_SLUG_ATTR, "blue-shirt"),
    );
    assert_eq!(
        page.attr(ids::REVIEWS_LIST, ids::PRODUCT_SLUG_ATTR),
        Some("blue-shirt")
    );
    assert_eq!(page.attr(ids::REVIEWS_LIST, "data-other"), None);
}

#[test]
fn actions_are_collected_in_document_order() {
    let page = Page::new()
        .with(
            ElementNode::new("div").id(ids::PRODUCT_LIST).child(
                ElementNode::new("button").on(Action::AddToCart {
                    slug: "a".to_string(),
                }),
            ),
        )
        .with(ElementNode::new("button").on(Action::Checkout));
    assert_eq!(
        page.actions(),
        vec![
            &Action::AddToCart {
                slug: "a".to_string()
            },
            &Action::Checkout
        ]
    );
}

#[test]
fn take_notices_drains_queue() {
    let mut page = Page::new();
    page.notify(Notice::Info("Added".to_string()));
    page.notify(Notice::Error("Cart is empty".to_string()));
    assert_eq!(page.notices().len(), 2);

    let drained = page.take_notices();
    assert_eq!(drained[1], Notice::Error("Cart is empty".to_string()));
    assert!(page.notices().is_empty());
}
