use thiserror::Error;

use shopfront_client::ClientError;

/// Errors returned by storefront components.
#[derive(Debug, Error)]
pub enum UiError {
    /// The request failed or its response could not be parsed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The page has no element with the id a component writes to.
    #[error("page has no element with id \"{0}\"")]
    MissingElement(String),

    /// A marker element lacks the data attribute its component needs.
    #[error("element \"{id}\" has no {attr} attribute")]
    MissingAttribute { id: String, attr: String },

    #[error("select \"{select}\" has no option with value \"{value}\"")]
    MissingOption { select: String, value: String },
}
