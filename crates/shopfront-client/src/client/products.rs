//! Product listing endpoints.

use shopfront_core::Product;

use super::StorefrontClient;
use crate::error::ClientError;

impl StorefrontClient {
    /// Fetches the products of the current category (`GET /category/products/`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the response is not a product array.
    pub async fn products_by_category(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.context.endpoint(&["category", "products"])?;
        self.get_json(url, "category products").await
    }

    /// Fetches the products of one subcategory
    /// (`GET /subcategory/{slug}/products/`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidSlug`] before any request if `slug` is malformed.
    /// - [`ClientError::Http`], [`ClientError::UnexpectedStatus`], or
    ///   [`ClientError::Deserialize`] as for [`Self::products_by_category`].
    pub async fn products_by_subcategory(&self, slug: &str) -> Result<Vec<Product>, ClientError> {
        let slug = Self::checked_slug(slug)?;
        let url = self.context.endpoint(&["subcategory", slug, "products"])?;
        self.get_json(url, &format!("subcategory products ({slug})"))
            .await
    }
}
