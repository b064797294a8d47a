//! HTTP client for the storefront REST API.
//!
//! Wraps `reqwest` with the storefront's URL layout, the `Session-Key` header
//! on writes, and typed response deserialization. Each endpoint group lives
//! in its own submodule as an `impl StorefrontClient` block.

mod cart;
mod navbar;
mod orders;
mod products;
mod reviews;
mod search;

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use shopfront_core::AppConfig;

use crate::context::{ClientContext, SessionKey, SESSION_KEY_HEADER};
use crate::error::ClientError;

pub use orders::CheckoutOutcome;

/// Slugs are interpolated into URL paths, so only the characters the backend
/// generates for them are allowed.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid slug regex"));

/// Client for the storefront REST API.
///
/// Holds the HTTP client and the [`ClientContext`] (base URL and session key).
/// Use [`StorefrontClient::from_config`] in binaries and
/// [`StorefrontClient::new`] to point at a mock server in tests.
pub struct StorefrontClient {
    client: Client,
    context: ClientContext,
}

impl StorefrontClient {
    /// Creates a client for `context` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        context: ClientContext,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, context })
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `api_base_url` is not a
    /// usable URL, or [`ClientError::Http`] if the client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        let context = ClientContext::new(&config.api_base_url)?
            .with_session_key(SessionKey::from(config.session_key.clone()));
        Self::new(context, config.request_timeout_secs, &config.user_agent)
    }

    #[must_use]
    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    /// Validates a slug before it is placed in a URL path.
    fn checked_slug(slug: &str) -> Result<&str, ClientError> {
        if SLUG_RE.is_match(slug) {
            Ok(slug)
        } else {
            Err(ClientError::InvalidSlug(slug.to_owned()))
        }
    }

    /// Sends a GET request, asserts a 2xx status, and deserializes the body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body does not match `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, ClientError> {
        tracing::debug!(%url, "GET {what}");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Self::parse_body(&body, what)
    }

    /// Sends a POST carrying the session-key header and an optional JSON body.
    ///
    /// Returns the status and raw body so callers can decide which statuses
    /// carry an application-level answer.
    async fn post_raw(
        &self,
        url: Url,
        body: Option<&serde_json::Value>,
        what: &str,
    ) -> Result<(StatusCode, String), ClientError> {
        tracing::debug!(
            %url,
            session = self.context.session_key().is_present(),
            "POST {what}"
        );
        let mut request = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(
                SESSION_KEY_HEADER,
                self.context.session_key().header_value(),
            );

        request = match body {
            Some(json) => request.json(json),
            None => request.header(reqwest::header::CONTENT_TYPE, "application/json"),
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }

    /// POST variant of [`Self::get_json`]: 2xx only, body deserialized as `T`.
    async fn post_json<T: DeserializeOwned>(
        &self,
        url: Url,
        body: Option<&serde_json::Value>,
        what: &str,
    ) -> Result<T, ClientError> {
        let url_text = url.to_string();
        let (status, text) = self.post_raw(url, body, what).await?;
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url_text,
            });
        }
        Self::parse_body(&text, what)
    }

    fn parse_body<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, ClientError> {
        serde_json::from_str(body).map_err(|e| ClientError::Deserialize {
            context: what.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
