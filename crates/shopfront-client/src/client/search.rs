//! Product search endpoint.

use reqwest::Url;

use shopfront_core::{SearchResponse, SearchResult};

use super::StorefrontClient;
use crate::error::ClientError;

impl StorefrontClient {
    /// Searches products by free text (`GET /products/search/?q=`).
    ///
    /// The query is percent-encoded. Callers decide whether an empty query
    /// is worth a request; this method sends whatever it is given.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body has no `results` array.
    pub async fn search_products(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        let url = self.search_url(query)?;
        let body: SearchResponse = self.get_json(url, &format!("search ({query})")).await?;
        Ok(body.results)
    }

    pub(crate) fn search_url(&self, query: &str) -> Result<Url, ClientError> {
        let mut url = self.context.endpoint(&["products", "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }
}
