//! One request, one decoded body
//!
//! Every propagate-raw operation funnels through [`VidaasClient::execute`]:
//! transport failures become `Error::Http`, undecodable bodies become
//! `Error::Decode`, and the status code is only inspected under
//! `StatusPolicy::Strict`.

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{StatusPolicy, VidaasClient};
use crate::error::{Error, Result};

impl VidaasClient {
    /// Send `request` and decode its body according to the client's status policy.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        operation: &'static str,
    ) -> Result<T> {
        let response = send(request, operation).await?;
        decode(response, self.status_policy(), operation).await
    }
}

/// Send a request with `Accept: application/json`.
pub(crate) async fn send(
    request: reqwest::RequestBuilder,
    operation: &'static str,
) -> Result<reqwest::Response> {
    let response = request
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| Error::Http(format!("{operation} request failed: {e}")))?;

    debug!(
        operation,
        status = response.status().as_u16(),
        "provider responded"
    );
    Ok(response)
}

/// Read the whole body and decode it as JSON.
pub(crate) async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    policy: StatusPolicy,
    operation: &'static str,
) -> Result<T> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Http(format!("reading {operation} response: {e}")))?;

    if policy == StatusPolicy::Strict && !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    serde_json::from_slice(&body)
        .map_err(|e| Error::Decode(format!("{operation} response ({status}): {e}")))
}
