//! Client handle shared by every VIDaaS operation
//!
//! `VidaasClient` carries no per-call state: a `reqwest::Client` (a cheap,
//! clonable connection pool handle), the provider base URI, and the status
//! policy. Each operation lives in its own module as an `impl VidaasClient`
//! block and issues exactly one request.

use std::time::Duration;

use serde::Deserialize;

use crate::authorize::{AuthorizationParams, build_authorization_url};
use crate::config::Config;
use crate::error::{Error, Result};

/// How propagate-raw operations treat non-2xx responses.
///
/// Authentication polling ignores this: it always returns `None` for any
/// status other than 200.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Decode and return the body whatever the status.
    #[default]
    Lenient,
    /// Fail with [`Error::Status`] on any non-2xx status.
    Strict,
}

/// Handle for calling the VIDaaS API.
#[derive(Debug, Clone)]
pub struct VidaasClient {
    http: reqwest::Client,
    base_uri: String,
    status_policy: StatusPolicy,
}

impl VidaasClient {
    /// Client with reqwest defaults and the lenient status policy.
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_uri)
    }

    /// Client over a caller-configured `reqwest::Client` (timeouts, proxies, TLS).
    pub fn with_http_client(http: reqwest::Client, base_uri: impl Into<String>) -> Self {
        let base_uri = base_uri.into();
        let base_uri = base_uri.strip_suffix('/').unwrap_or(&base_uri).to_owned();
        Self {
            http,
            base_uri,
            status_policy: StatusPolicy::default(),
        }
    }

    /// Build a client from a loaded [`Config`], applying its timeout and status policy.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.provider.timeout_secs))
            .build()
            .map_err(|e| Error::Http(format!("building HTTP client: {e}")))?;

        Ok(Self::with_http_client(http, config.provider.base_uri.clone())
            .with_status_policy(config.provider.status_policy))
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Authorization URL against this client's base URI. No I/O.
    pub fn authorization_url(
        &self,
        client_id: &str,
        code_challenge: &str,
        params: &AuthorizationParams,
    ) -> String {
        build_authorization_url(&self.base_uri, client_id, code_challenge, params)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path)
    }
}
