//! View-models deserialized from the storefront REST API.
//!
//! Every type here is read-only: it is built from a response body, projected
//! into view nodes, and dropped. None of them expose mutating methods.
//!
//! ## Observed shapes
//!
//! ### Money
//! The backend serializes decimal fields (`price`, `discount_price`, `total`,
//! `total_price`) as JSON strings like `"19.99"`. Some endpoints have been
//! seen returning plain JSON numbers instead. Both are accepted and kept as the
//! exact text to display; this layer never does arithmetic on money.
//!
//! ### Order numbers
//! Usually a string (`"ORD-1042"`), occasionally a bare integer. Normalized to
//! a string.
//!
//! ### Images
//! `image` may be `null` for products without a photo; it is modelled as
//! `Option<String>`.

use serde::{Deserialize, Deserializer};

/// Response from `GET /cart/count/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartCount {
    pub count: u64,
}

/// `{ "message": ... }` acknowledgement returned by cart and review writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// A purchasable product as returned by the category, subcategory, and
/// product listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    /// URL slug, e.g. `"blue-shirt"`. Also keys the variant select control.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(deserialize_with = "de_text")]
    pub price: String,
    /// Sale price; `null` or absent when the product is not discounted.
    #[serde(default, deserialize_with = "de_opt_text")]
    pub discount_price: Option<String>,
    /// Ordered as the backend returns them; the first is the storefront default.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// A purchasable configuration of a [`Product`] (size, color, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variant {
    pub id: i64,
    pub title: String,
    #[serde(deserialize_with = "de_text")]
    pub price: String,
}

/// One line of an order.
///
/// Summary lines carry `total_price`; history lines only carry the name and
/// quantity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: u32,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub total_price: Option<String>,
}

/// Response from `GET /order/summary/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderSummary {
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A placed order from `GET /order/history/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "de_text")]
    pub order_number: String,
    pub status: String,
    #[serde(deserialize_with = "de_text")]
    pub total: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Response from `POST /order/checkout/`.
///
/// `success: false` is an application-level rejection and comes with an
/// `error` message. When the backend hands off to a hosted payment page it
/// returns `checkout_url` instead of an order number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub order_number: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub checkout_url: Option<String>,
}

/// A product review from `GET /product/{slug}/reviews/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    /// Display name of the reviewer.
    pub user: String,
    /// 1-5 stars.
    pub rating: u8,
    #[serde(default)]
    pub content: String,
}

/// Response from `GET /products/search/?q=`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A search hit. The backend returns full product rows; only the name and
/// price are displayed, the rest is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    pub name: String,
    #[serde(deserialize_with = "de_text")]
    pub price: String,
}

/// Response from `GET /navbar/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Navbar {
    #[serde(default)]
    pub categories: Vec<NavCategory>,
    #[serde(default)]
    pub cart_item_count: u64,
    pub user_data: NavUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavCategory {
    pub name: String,
    pub slug: String,
    pub url: String,
}

/// Account links for the navbar. The backend sends `null` for the links that
/// do not apply to the current authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavUser {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub logout_url: Option<String>,
    #[serde(default)]
    pub login_url: Option<String>,
    #[serde(default)]
    pub signup_url: Option<String>,
}

/// A JSON scalar that should be displayed as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<RawText> for String {
    fn from(raw: RawText) -> Self {
        match raw {
            RawText::Text(s) => s,
            RawText::Int(n) => n.to_string(),
            RawText::Float(n) => n.to_string(),
        }
    }
}

fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawText::deserialize(deserializer).map(String::from)
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawText>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
