use shopfront_core::CheckoutResponse;

use super::*;

fn test_client(base_url: &str) -> StorefrontClient {
    let context = ClientContext::new(base_url).expect("valid base url");
    StorefrontClient::new(context, 5, "shopfront-test/0.1").expect("client construction")
}

#[test]
fn endpoint_appends_segments_with_trailing_slash() {
    let client = test_client("http://localhost:8000/api");
    let url = client.context().endpoint(&["cart", "count"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/api/cart/count/");
}

#[test]
fn endpoint_tolerates_trailing_slash_on_base() {
    let client = test_client("http://localhost:8000/api/");
    let url = client.context().endpoint(&["order", "history"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/api/order/history/");
}

#[test]
fn endpoint_on_bare_origin() {
    let client = test_client("https://shop.example.com");
    let url = client.context().endpoint(&["navbar"]).unwrap();
    assert_eq!(url.as_str(), "https://shop.example.com/navbar/");
}

#[test]
fn search_url_encodes_query() {
    let client = test_client("http://localhost:8000/api");
    let url = client.search_url("shirt & tie").unwrap();
    assert!(
        url.as_str().ends_with("/api/products/search/?q=shirt+%26+tie"),
        "query should be percent-encoded: {url}"
    );
}

#[test]
fn checked_slug_accepts_backend_slugs() {
    assert_eq!(
        StorefrontClient::checked_slug("blue-shirt_2").unwrap(),
        "blue-shirt_2"
    );
}

#[test]
fn checked_slug_rejects_path_characters() {
    for bad in ["", "../admin", "a/b", "shirt?x=1", "caf\u{e9}"] {
        let err = StorefrontClient::checked_slug(bad).unwrap_err();
        assert!(
            matches!(err, ClientError::InvalidSlug(ref s) if s == bad),
            "expected InvalidSlug for {bad:?}, got: {err:?}"
        );
    }
}

#[test]
fn context_rejects_non_http_base() {
    let err = ClientContext::new("ftp://example.com").unwrap_err();
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));

    let err = ClientContext::new("/api").unwrap_err();
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
}

#[test]
fn session_key_header_value_defaults_to_empty() {
    assert_eq!(SessionKey::none().header_value(), "");
    assert_eq!(SessionKey::new("").header_value(), "");
    assert!(!SessionKey::new("").is_present());
    assert_eq!(SessionKey::new("abc").header_value(), "abc");
}

#[test]
fn session_key_debug_is_redacted() {
    let debug = format!("{:?}", SessionKey::new("secret-key"));
    assert!(!debug.contains("secret-key"));
}

#[test]
fn checkout_outcome_from_success() {
    let outcome = CheckoutOutcome::from(CheckoutResponse {
        success: true,
        order_number: Some("ORD-7".to_string()),
        error: None,
        checkout_url: None,
    });
    assert_eq!(
        outcome,
        CheckoutOutcome::Placed {
            order_number: "ORD-7".to_string()
        }
    );
}

#[test]
fn checkout_outcome_from_rejection_keeps_message_verbatim() {
    let outcome = CheckoutOutcome::from(CheckoutResponse {
        success: false,
        order_number: None,
        error: Some("Cart is empty".to_string()),
        checkout_url: None,
    });
    assert_eq!(
        outcome,
        CheckoutOutcome::Rejected {
            error: "Cart is empty".to_string()
        }
    );
}

#[test]
fn checkout_outcome_from_payment_handoff() {
    let outcome = CheckoutOutcome::from(CheckoutResponse {
        success: false,
        order_number: None,
        error: None,
        checkout_url: Some("https://pay.example.com/s/1".to_string()),
    });
    assert!(matches!(outcome, CheckoutOutcome::Redirect { ref url } if url.contains("pay.example.com")));
}

#[test]
fn checkout_outcome_rejection_without_message_uses_default() {
    let outcome = CheckoutOutcome::from(CheckoutResponse {
        success: false,
        order_number: None,
        error: None,
        checkout_url: None,
    });
    assert_eq!(
        outcome,
        CheckoutOutcome::Rejected {
            error: "Checkout failed".to_string()
        }
    );
}
