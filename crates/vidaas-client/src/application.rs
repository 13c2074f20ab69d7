//! Client application registration and client-credentials tokens
//!
//! Both calls follow the propagate-raw contract: whatever JSON the provider
//! answers with is decoded and handed back, error statuses included, unless
//! the client runs with `StatusPolicy::Strict`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::body::Fields;
use crate::client::VidaasClient;
use crate::constants::{APPLICATION_PATH, CLIENT_TOKEN_PATH};
use crate::credentials::ClientCredentials;
use crate::error::Result;
use crate::token::TokenResponse;

/// Registration payload. Nothing is validated locally; the provider decides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterApplication {
    pub name: String,
    pub comments: String,
    pub redirect_uris: Vec<String>,
    pub email: String,
}

/// Registration result.
///
/// On success the provider fills all four known fields. Anything else the
/// body carries, including wrongly typed known keys, lands in `extra`; the
/// full body is kept in `raw`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RegistrationResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub extra: Map<String, Value>,
    pub raw: Value,
}

impl From<Value> for RegistrationResponse {
    fn from(raw: Value) -> Self {
        let mut fields = Fields::new(&raw);
        Self {
            status: fields.string("status"),
            message: fields.string("message"),
            client_id: fields.string("client_id"),
            client_secret: fields.string("client_secret"),
            extra: fields.into_extra(),
            raw,
        }
    }
}

impl RegistrationResponse {
    /// Credentials issued by the provider, when both halves are present.
    pub fn credentials(&self) -> Option<ClientCredentials> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some(ClientCredentials::new(id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}

impl VidaasClient {
    /// Register a client application (`POST /v0/oauth/application`).
    pub async fn register_application(
        &self,
        application: &RegisterApplication,
    ) -> Result<RegistrationResponse> {
        debug!(
            name = %application.name,
            redirect_uris = application.redirect_uris.len(),
            "registering application"
        );

        let request = self
            .http()
            .post(self.endpoint(APPLICATION_PATH))
            .json(application);
        self.execute(request, "register_application").await
    }

    /// Request an application token with the client-credentials grant
    /// (`POST /v0/oauth/client_token`).
    pub async fn request_client_token(
        &self,
        credentials: &ClientCredentials,
    ) -> Result<TokenResponse> {
        debug!(client_id = %credentials.client_id, "requesting client token");

        let request = self
            .http()
            .post(self.endpoint(CLIENT_TOKEN_PATH))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.secret()),
            ]);
        self.execute(request, "request_client_token").await
    }
}
