//! Authorization-code token exchange
//!
//! Final step of the PKCE flow: the user approved the request on their
//! device, the provider redirected with a code, and the caller now trades
//! that code plus the original verifier for an access token.
//!
//! The token endpoint follows the propagate-raw contract, so a rejected
//! code comes back as a `TokenResponse` whose fields are `None` and whose
//! `extra` map holds the provider's error object.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::body::Fields;
use crate::client::VidaasClient;
use crate::constants::TOKEN_PATH;
use crate::credentials::ClientCredentials;
use crate::error::Result;

/// Response from both token endpoints (client credentials and authorization code).
///
/// Known keys with an unexpected type stay in `extra`; `raw` holds the
/// whole body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    /// Seconds until the access token expires
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
    /// CPF/CNPJ of the user who authorized, on authorization-code tokens
    pub authorized_identification: Option<String>,
    pub authorized_identification_type: Option<String>,
    pub extra: Map<String, Value>,
    pub raw: Value,
}

impl From<Value> for TokenResponse {
    fn from(raw: Value) -> Self {
        let mut fields = Fields::new(&raw);
        Self {
            access_token: fields.string("access_token"),
            token_type: fields.string("token_type"),
            expires_in: fields.u64("expires_in"),
            scope: fields.string("scope"),
            authorized_identification: fields.string("authorized_identification"),
            authorized_identification_type: fields.string("authorized_identification_type"),
            extra: fields.into_extra(),
            raw,
        }
    }
}

/// Inputs of the authorization-code exchange.
#[derive(Clone)]
pub struct CodeExchange<'a> {
    pub credentials: &'a ClientCredentials,
    pub authorization_code: &'a str,
    pub code_verifier: &'a str,
    pub redirect_uri: &'a str,
}

impl fmt::Debug for CodeExchange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeExchange")
            .field("credentials", self.credentials)
            .field("authorization_code", &"[REDACTED]")
            .field("code_verifier", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

impl VidaasClient {
    /// Exchange an authorization code for an access token (`POST /v0/oauth/token`).
    pub async fn exchange_code_for_token(
        &self,
        exchange: &CodeExchange<'_>,
    ) -> Result<TokenResponse> {
        debug!(
            client_id = %exchange.credentials.client_id,
            "exchanging authorization code"
        );

        let request = self.http().post(self.endpoint(TOKEN_PATH)).form(&[
            ("grant_type", "authorization_code"),
            ("client_id", exchange.credentials.client_id.as_str()),
            ("client_secret", exchange.credentials.secret()),
            ("code_verifier", exchange.code_verifier),
            ("code", exchange.authorization_code),
            ("redirect_uri", exchange.redirect_uri),
        ]);
        self.execute(request, "exchange_code_for_token").await
    }
}
