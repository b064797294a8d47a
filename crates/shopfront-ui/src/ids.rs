//! Element ids the storefront reads from and writes to.

pub const CART_COUNT: &str = "cart-count";
pub const NAVBAR: &str = "navbar";
pub const ORDER_ITEMS: &str = "order-items";
pub const ORDER_LIST: &str = "order-list";
pub const ORDER_SUCCESS: &str = "order-success";
pub const ORDER_NUMBER: &str = "order-number";
pub const PRODUCT_LIST: &str = "product-list";
pub const REVIEWS_LIST: &str = "reviews-list";
pub const SEARCH_QUERY: &str = "search-query";
pub const SEARCH_RESULTS: &str = "search-results";

/// Data attribute on `product-list` selecting a subcategory listing.
pub const SUBCATEGORY_SLUG_ATTR: &str = "data-subcategory-slug";
/// Data attribute on `reviews-list` naming the reviewed product.
pub const PRODUCT_SLUG_ATTR: &str = "data-product-slug";

/// Id of the variant select control rendered inside a product card.
#[must_use]
pub fn variant_select(slug: &str) -> String {
    format!("variant-select-{slug}")
}
