use shopfront_core::Navbar;

use super::StorefrontClient;
use crate::error::ClientError;

impl StorefrontClient {
    /// Fetches navigation data: categories, cart badge, account links
    /// (`GET /navbar/`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the response shape is unexpected.
    pub async fn navbar(&self) -> Result<Navbar, ClientError> {
        let url = self.context.endpoint(&["navbar"])?;
        self.get_json(url, "navbar").await
    }
}
