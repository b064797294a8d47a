use shopfront_client::StorefrontClient;
use shopfront_core::Review;

use crate::error::UiError;
use crate::ids;
use crate::page::Page;
use crate::view::{ElementNode, Node};

/// Product reviews.
pub struct Reviews<'a> {
    client: &'a StorefrontClient,
}

impl<'a> Reviews<'a> {
    #[must_use]
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self { client }
    }

    /// Renders the reviews of `slug` into `reviews-list`.
    ///
    /// # Errors
    ///
    /// - [`UiError::MissingElement`] if the page has no `reviews-list`.
    /// - [`UiError::Client`] if the request fails; the page is untouched.
    pub async fn fetch_reviews(&self, page: &mut Page, slug: &str) -> Result<usize, UiError> {
        page.require(ids::REVIEWS_LIST)?;
        let reviews = self.client.reviews(slug).await?;
        apply_reviews(page, &reviews)
    }

    /// Posts a review and returns the backend's acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Client`]; a rating outside 1-5 is rejected before
    /// any request.
    pub async fn submit_review(
        &self,
        slug: &str,
        rating: u8,
        comment: &str,
    ) -> Result<String, UiError> {
        Ok(self.client.submit_review(slug, rating, comment).await?)
    }
}

pub(crate) fn apply_reviews(page: &mut Page, reviews: &[Review]) -> Result<usize, UiError> {
    page.replace_children(ids::REVIEWS_LIST, render_reviews(reviews))?;
    Ok(reviews.len())
}

#[must_use]
pub fn render_reviews(reviews: &[Review]) -> Vec<Node> {
    reviews
        .iter()
        .map(|review| {
            ElementNode::new("div")
                .class("review")
                .child(ElementNode::new("h3").text(review.user.as_str()))
                .child(ElementNode::new("p").text(format!("Rating: {}", review.rating)))
                .child(ElementNode::new("p").text(review.content.as_str()))
                .into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_shows_author_rating_and_content() {
        let nodes = render_reviews(&[Review {
            user: "ana".to_string(),
            rating: 4,
            content: "Fits well & washes fine".to_string(),
        }]);
        assert_eq!(
            nodes[0].to_html(),
            r#"<div class="review"><h3>ana</h3><p>Rating: 4</p><p>Fits well &amp; washes fine</p></div>"#
        );
    }
}
