pub mod client;
pub mod context;
pub mod error;

pub use client::{CheckoutOutcome, StorefrontClient};
pub use context::{ClientContext, SessionKey, SESSION_KEY_HEADER};
pub use error::ClientError;
