use shopfront_client::StorefrontClient;

use crate::error::UiError;
use crate::ids;
use crate::page::Page;

/// Result of a successful add-to-cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedToCart {
    /// Message from the backend, shown to the shopper as-is.
    pub message: String,
    /// Variant that was sent; `None` means the backend picked the default.
    pub variant_id: Option<i64>,
    /// Count written by the follow-up refresh, if that refresh succeeded.
    pub refreshed_count: Option<u64>,
}

/// Cart badge and add-to-cart.
pub struct Cart<'a> {
    client: &'a StorefrontClient,
}

impl<'a> Cart<'a> {
    #[must_use]
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self { client }
    }

    /// Fetches the cart count and writes it into `cart-count`.
    ///
    /// # Errors
    ///
    /// - [`UiError::MissingElement`] if the page has no `cart-count`; no
    ///   request is made.
    /// - [`UiError::Client`] if the request fails; the page is untouched.
    pub async fn fetch_cart_count(&self, page: &mut Page) -> Result<u64, UiError> {
        page.require(ids::CART_COUNT)?;
        let count = self.client.cart_count().await?;
        apply_count(page, count)?;
        Ok(count)
    }

    /// Adds `slug` to the cart, then refreshes the count once.
    ///
    /// The variant comes from the product's `variant-select-{slug}` control
    /// when the page has one, else from `fallback_variant_id`. A failed
    /// refresh is logged and reported as `refreshed_count: None`; the add
    /// itself still succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Client`] if the add request fails. No refresh is
    /// attempted in that case.
    pub async fn add_to_cart(
        &self,
        page: &mut Page,
        slug: &str,
        fallback_variant_id: Option<i64>,
    ) -> Result<AddedToCart, UiError> {
        let variant_id = selected_variant(page, slug).or(fallback_variant_id);
        let message = self.client.add_to_cart(slug, variant_id).await?;
        tracing::debug!(slug, ?variant_id, "added to cart");

        let refreshed_count = self.refresh_count(page).await;
        Ok(AddedToCart {
            message,
            variant_id,
            refreshed_count,
        })
    }

    async fn refresh_count(&self, page: &mut Page) -> Option<u64> {
        let count = match self.client.cart_count().await {
            Ok(count) => count,
            Err(error) => {
                tracing::warn!(%error, "cart count refresh failed");
                return None;
            }
        };
        if page.contains(ids::CART_COUNT) {
            apply_count(page, count).ok()?;
        }
        Some(count)
    }
}

pub(crate) fn apply_count(page: &mut Page, count: u64) -> Result<(), UiError> {
    page.set_text(ids::CART_COUNT, count.to_string())
}

/// Variant id chosen in the product's select control, if there is one.
fn selected_variant(page: &Page, slug: &str) -> Option<i64> {
    let value = page.control_value(&ids::variant_select(slug))?;
    match value.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(slug, %value, "variant select holds a non-numeric value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ElementNode;

    #[test]
    fn selected_variant_reads_select_control() {
        let page = Page::new().with(
            ElementNode::new("select")
                .id("variant-select-tee")
                .child(ElementNode::new("option").attr("value", "4"))
                .child(
                    ElementNode::new("option")
                        .attr("value", "5")
                        .attr("selected", ""),
                ),
        );
        assert_eq!(selected_variant(&page, "tee"), Some(5));
        assert_eq!(selected_variant(&page, "other"), None);
    }

    #[test]
    fn selected_variant_ignores_non_numeric_value() {
        let page = Page::new().with(
            ElementNode::new("select")
                .id("variant-select-tee")
                .child(ElementNode::new("option").attr("value", "large")),
        );
        assert_eq!(selected_variant(&page, "tee"), None);
    }
}
