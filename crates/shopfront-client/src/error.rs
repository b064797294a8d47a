use thiserror::Error;

/// Errors returned by [`crate::StorefrontClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a status this endpoint does not accept.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A product or subcategory slug that cannot be placed in a URL path.
    #[error("invalid slug \"{0}\"")]
    InvalidSlug(String),

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}
