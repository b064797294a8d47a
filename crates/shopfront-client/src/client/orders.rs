//! Order summary, history, and checkout endpoints.

use reqwest::StatusCode;

use shopfront_core::{CheckoutResponse, Order, OrderSummary};

use super::StorefrontClient;
use crate::error::ClientError;

/// Message used when the backend rejects a checkout without saying why.
const DEFAULT_CHECKOUT_ERROR: &str = "Checkout failed";

/// Application-level result of a checkout request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The order was placed. `order_number` is empty if the backend omitted it.
    Placed { order_number: String },
    /// The backend handed off to a hosted payment page.
    Redirect { url: String },
    /// The backend refused the checkout; `error` is its message verbatim.
    Rejected { error: String },
}

impl From<CheckoutResponse> for CheckoutOutcome {
    fn from(resp: CheckoutResponse) -> Self {
        if resp.success {
            return Self::Placed {
                order_number: resp.order_number.unwrap_or_default(),
            };
        }
        if let Some(url) = resp.checkout_url {
            return Self::Redirect { url };
        }
        Self::Rejected {
            error: resp
                .error
                .unwrap_or_else(|| DEFAULT_CHECKOUT_ERROR.to_string()),
        }
    }
}

impl StorefrontClient {
    /// Fetches the current (unplaced) order summary (`GET /order/summary/`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the response shape is unexpected.
    pub async fn order_summary(&self) -> Result<OrderSummary, ClientError> {
        let url = self.context.endpoint(&["order", "summary"])?;
        self.get_json(url, "order summary").await
    }

    /// Fetches every placed order for the session (`GET /order/history/`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the response shape is unexpected.
    pub async fn order_history(&self) -> Result<Vec<Order>, ClientError> {
        let url = self.context.endpoint(&["order", "history"])?;
        self.get_json(url, "order history").await
    }

    /// Submits the current cart for checkout (`POST /order/checkout/`).
    ///
    /// The backend answers refusals with a 4xx status and a JSON body; those
    /// are returned as [`CheckoutOutcome::Rejected`], not as errors. A 5xx
    /// carrying a JSON `error` is a rejection too. A JSON body on
    /// `303 See Other` is a payment hand-off.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a 4xx or 5xx whose body is not a
    ///   checkout response, or a 5xx without an `error` message.
    /// - [`ClientError::Deserialize`] if a 2xx body is not a checkout response.
    pub async fn checkout(&self) -> Result<CheckoutOutcome, ClientError> {
        let url = self.context.endpoint(&["order", "checkout"])?;
        let url_text = url.to_string();
        let (status, body) = self.post_raw(url, None, "checkout").await?;
        let unexpected = || ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url: url_text.clone(),
        };

        let accepted = status.is_success()
            || status.is_client_error()
            || status.is_server_error()
            || status == StatusCode::SEE_OTHER;
        if !accepted {
            return Err(unexpected());
        }

        let resp = match Self::parse_body::<CheckoutResponse>(&body, "checkout") {
            Ok(resp) => resp,
            Err(err) if status.is_success() => return Err(err),
            Err(_) => return Err(unexpected()),
        };
        if status.is_server_error() {
            return match resp.error {
                Some(error) => Ok(CheckoutOutcome::Rejected { error }),
                None => Err(unexpected()),
            };
        }
        Ok(CheckoutOutcome::from(resp))
    }
}
