use serde_json::json;

use super::*;

#[test]
fn product_parses_string_prices_and_variants() {
    let product: Product = serde_json::from_value(json!({
        "slug": "blue-shirt",
        "name": "Blue Shirt",
        "image": "/media/blue.jpg",
        "price": "19.99",
        "discount_price": "14.99",
        "variants": [
            { "id": 7, "title": "Small", "price": "19.99" },
            { "id": 8, "title": "Large", "price": "21.99" }
        ]
    }))
    .unwrap();

    assert_eq!(product.price, "19.99");
    assert_eq!(product.discount_price.as_deref(), Some("14.99"));
    assert_eq!(product.variants.len(), 2);
    assert_eq!(product.variants[0].id, 7);
}

#[test]
fn product_accepts_numeric_price_and_null_discount() {
    let product: Product = serde_json::from_value(json!({
        "slug": "mug",
        "name": "Mug",
        "image": null,
        "price": 8.5,
        "discount_price": null,
        "variants": []
    }))
    .unwrap();

    assert_eq!(product.price, "8.5");
    assert!(product.discount_price.is_none());
    assert!(product.image.is_none());
    assert!(product.variants.is_empty());
}

#[test]
fn product_without_variants_field_defaults_to_empty() {
    let product: Product = serde_json::from_value(json!({
        "slug": "poster",
        "name": "Poster",
        "price": "5.00"
    }))
    .unwrap();

    assert!(product.variants.is_empty());
    assert!(product.discount_price.is_none());
}

#[test]
fn order_normalizes_integer_order_number() {
    let order: Order = serde_json::from_value(json!({
        "order_number": 1042,
        "status": "shipped",
        "total": "39.98",
        "items": [{ "product_name": "Blue Shirt", "quantity": 2 }]
    }))
    .unwrap();

    assert_eq!(order.order_number, "1042");
    assert_eq!(order.items[0].quantity, 2);
    assert!(order.items[0].total_price.is_none());
}

#[test]
fn checkout_response_failure_shape() {
    let resp: CheckoutResponse =
        serde_json::from_value(json!({ "success": false, "error": "Cart is empty" })).unwrap();

    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("Cart is empty"));
    assert!(resp.order_number.is_none());
}

#[test]
fn checkout_response_without_success_flag_is_not_success() {
    let resp: CheckoutResponse =
        serde_json::from_value(json!({ "error": "No active order found" })).unwrap();

    assert!(!resp.success);
}

#[test]
fn search_result_ignores_extra_fields() {
    let resp: SearchResponse = serde_json::from_value(json!({
        "results": [{
            "id": 3,
            "name": "Blue Shirt",
            "price": "19.99",
            "description": "cotton",
            "categories": [1, 2]
        }]
    }))
    .unwrap();

    assert_eq!(resp.results.len(), 1);
    assert_eq!(resp.results[0].name, "Blue Shirt");
}

#[test]
fn negative_cart_count_is_rejected() {
    let parsed = serde_json::from_value::<CartCount>(json!({ "count": -1 }));
    assert!(parsed.is_err());
}

#[test]
fn navbar_parses_anonymous_user() {
    let navbar: Navbar = serde_json::from_value(json!({
        "categories": [{ "name": "Shirts", "slug": "shirts", "url": "/category/shirts/" }],
        "cart_item_count": 0,
        "user_data": {
            "is_authenticated": false,
            "profile_url": null,
            "logout_url": null,
            "login_url": "/store/login",
            "signup_url": "/store/signup"
        }
    }))
    .unwrap();

    assert_eq!(navbar.categories[0].slug, "shirts");
    assert!(!navbar.user_data.is_authenticated);
    assert_eq!(navbar.user_data.login_url.as_deref(), Some("/store/login"));
}
