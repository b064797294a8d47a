//! Product review endpoints.

use serde_json::json;

use shopfront_core::{ApiMessage, Review};

use super::StorefrontClient;
use crate::error::ClientError;

impl StorefrontClient {
    /// Fetches the reviews for a product (`GET /product/{slug}/reviews/`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidSlug`] before any request if `slug` is malformed.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the response is not a review array.
    pub async fn reviews(&self, slug: &str) -> Result<Vec<Review>, ClientError> {
        let slug = Self::checked_slug(slug)?;
        let url = self.context.endpoint(&["product", slug, "reviews"])?;
        self.get_json(url, &format!("reviews ({slug})")).await
    }

    /// Posts a review for a product (`POST /product/{slug}/reviews/`).
    ///
    /// Returns the backend's acknowledgement message.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidRating`] before any request if `rating` is not 1-5.
    /// - [`ClientError::InvalidSlug`] before any request if `slug` is malformed.
    /// - [`ClientError::Http`], [`ClientError::UnexpectedStatus`], or
    ///   [`ClientError::Deserialize`] as for every endpoint.
    pub async fn submit_review(
        &self,
        slug: &str,
        rating: u8,
        comment: &str,
    ) -> Result<String, ClientError> {
        if !(1..=5).contains(&rating) {
            return Err(ClientError::InvalidRating(rating));
        }
        let slug = Self::checked_slug(slug)?;
        let url = self.context.endpoint(&["product", slug, "reviews"])?;
        let body = json!({ "rating": rating, "comment": comment });
        let reply: ApiMessage = self
            .post_json(url, Some(&body), &format!("submit review ({slug})"))
            .await?;
        Ok(reply.message)
    }
}
