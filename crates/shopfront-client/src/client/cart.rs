//! Cart endpoints.

use serde_json::json;

use shopfront_core::{ApiMessage, CartCount};

use super::StorefrontClient;
use crate::error::ClientError;

impl StorefrontClient {
    /// Fetches the number of items in the current cart (`GET /cart/count/`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body has no non-negative `count`.
    pub async fn cart_count(&self) -> Result<u64, ClientError> {
        let url = self.context.endpoint(&["cart", "count"])?;
        let body: CartCount = self.get_json(url, "cart count").await?;
        Ok(body.count)
    }

    /// Adds a product variant to the cart (`POST /cart/add/{slug}/`).
    ///
    /// `variant_id` is sent as-is; `None` serializes as `null` and the backend
    /// picks the product's default.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidSlug`] before any request if `slug` is malformed.
    /// - [`ClientError::Http`], [`ClientError::UnexpectedStatus`], or
    ///   [`ClientError::Deserialize`] as for every endpoint.
    pub async fn add_to_cart(
        &self,
        slug: &str,
        variant_id: Option<i64>,
    ) -> Result<String, ClientError> {
        let slug = Self::checked_slug(slug)?;
        let url = self.context.endpoint(&["cart", "add", slug])?;
        let body = json!({ "variant_id": variant_id });
        let reply: ApiMessage = self
            .post_json(url, Some(&body), &format!("add to cart ({slug})"))
            .await?;
        Ok(reply.message)
    }
}
