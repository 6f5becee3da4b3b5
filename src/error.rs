//! Error type shared by storage, session, configuration, and network helpers.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `Result<_, ClientError>` and propagate with `?`. Page
//! components are the only place errors become user-visible text; the
//! session store logs and recovers instead of surfacing anything.

/// Errors produced by the client runtime.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// `window.localStorage` is missing or access was denied.
    #[error("browser storage is unavailable")]
    StorageUnavailable,
    /// A storage write or removal was refused (quota, private mode).
    #[error("storage operation failed for key `{key}`")]
    Storage { key: String },
    /// Persisted session data could not be decoded.
    #[error("malformed persisted session: {0}")]
    MalformedSession(#[source] serde_json::Error),
    /// A build-time configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Transport-level HTTP failure or undecodable response body.
    #[error("request failed: {0}")]
    Http(String),
    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// Form input failed local validation.
    #[error("{0}")]
    Validation(&'static str),
    /// Operation needs a browser and the crate was built without `hydrate`.
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Http(err.to_string())
    }
}
