//! Explicit request context handed to the client at construction.
//!
//! The base URL and the anonymous session key travel together in a
//! [`ClientContext`] instead of being read from process-wide state, so each
//! component can be pointed at a mock server with its own session.

use reqwest::Url;

use crate::error::ClientError;

/// Header carrying the anonymous shopping-session key on write requests.
pub const SESSION_KEY_HEADER: &str = "Session-Key";

/// Opaque client-held token identifying a shopping session.
///
/// The storefront never creates or refreshes it. When absent, write requests
/// still carry the header with an empty value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionKey(Option<String>);

impl SessionKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        if key.is_empty() {
            Self(None)
        } else {
            Self(Some(key))
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Value to send in the [`SESSION_KEY_HEADER`] header.
    #[must_use]
    pub fn header_value(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(_) => f.write_str("SessionKey([redacted])"),
            None => f.write_str("SessionKey(None)"),
        }
    }
}

impl From<Option<String>> for SessionKey {
    fn from(key: Option<String>) -> Self {
        key.map_or_else(Self::none, Self::new)
    }
}

/// Base URL and session identity for every request a client issues.
#[derive(Debug, Clone)]
pub struct ClientContext {
    base_url: Url,
    session_key: SessionKey,
}

impl ClientContext {
    /// Creates a context rooted at `base_url` with no session key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse or
    /// is not an `http`/`https` URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: parsed,
            session_key: SessionKey::none(),
        })
    }

    #[must_use]
    pub fn with_session_key(mut self, session_key: SessionKey) -> Self {
        self.session_key = session_key;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn session_key(&self) -> &SessionKey {
        &self.session_key
    }

    /// Joins `segments` onto the base path, always ending in `/` as the
    /// backend's routes do.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the base URL cannot carry a
    /// path. [`ClientContext::new`] already rejects such URLs.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ClientError::InvalidBaseUrl {
                    base_url: self.base_url.to_string(),
                    reason: "URL cannot be a base".to_string(),
                })?;
            path.pop_if_empty();
            path.extend(segments);
            path.push("");
        }
        Ok(url)
    }
}
