//! Error types for VIDaaS client operations

/// Errors from VIDaaS client operations.
///
/// A non-2xx status is only an error under [`StatusPolicy::Strict`]; by
/// default the provider's error body is decoded and returned as data.
///
/// [`StatusPolicy::Strict`]: crate::StatusPolicy::Strict
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<common::Error> for Error {
    fn from(err: common::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
