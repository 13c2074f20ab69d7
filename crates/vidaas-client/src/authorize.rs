//! Authorization URL construction and authentication polling
//!
//! Opening the authorization URL starts the QR code / push flow on the
//! user's device. Once the user approves, the provider redirects to the
//! registered URI with `?code=...`, and polling the authentications
//! endpoint with that code yields the authorization token.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::body::Fields;
use crate::client::VidaasClient;
use crate::constants::{
    AUTHENTICATIONS_PATH, AUTHORIZE_PATH, CODE_CHALLENGE_METHOD, SCOPE_SINGLE_SIGNATURE,
};
use crate::error::Result;
use crate::http::{decode, send};

/// Optional authorization request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationParams {
    /// `single_signature` (default) or `signature_session`
    pub scope: String,
    /// CPF or CNPJ used to pick the certificate
    pub login_hint: Option<String>,
    /// Requested token lifetime in seconds
    pub lifetime: Option<u64>,
    pub redirect_uri: Option<String>,
}

impl Default for AuthorizationParams {
    fn default() -> Self {
        Self {
            scope: SCOPE_SINGLE_SIGNATURE.to_owned(),
            login_hint: None,
            lifetime: None,
            redirect_uri: None,
        }
    }
}

impl AuthorizationParams {
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn login_hint(mut self, login_hint: impl Into<String>) -> Self {
        self.login_hint = Some(login_hint.into());
        self
    }

    pub fn lifetime(mut self, seconds: u64) -> Self {
        self.lifetime = Some(seconds);
        self
    }

    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }
}

/// Build the authorization URL.
///
/// Values are joined verbatim with no percent-encoding; callers must
/// pre-encode anything containing reserved characters. `login_hint`,
/// `lifetime` and `redirect_uri` are appended in that order, each only
/// when set and non-empty (a zero lifetime counts as empty).
pub fn build_authorization_url(
    base_uri: &str,
    client_id: &str,
    code_challenge: &str,
    params: &AuthorizationParams,
) -> String {
    let mut url = format!(
        "{base_uri}{AUTHORIZE_PATH}?client_id={client_id}&code_challenge={code_challenge}\
         &code_challenge_method={CODE_CHALLENGE_METHOD}&response_type=code&scope={}",
        params.scope,
    );

    if let Some(hint) = params.login_hint.as_deref().filter(|h| !h.is_empty()) {
        url.push_str("&login_hint=");
        url.push_str(hint);
    }
    if let Some(lifetime) = params.lifetime.filter(|l| *l != 0) {
        url.push_str(&format!("&lifetime={lifetime}"));
    }
    if let Some(redirect) = params.redirect_uri.as_deref().filter(|r| !r.is_empty()) {
        url.push_str("&redirect_uri=");
        url.push_str(redirect);
    }

    url
}

/// Body of a completed authentication.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct AuthenticationResponse {
    pub authorization_token: Option<String>,
    pub redirect_url: Option<String>,
    pub extra: Map<String, Value>,
    pub raw: Value,
}

impl From<Value> for AuthenticationResponse {
    fn from(raw: Value) -> Self {
        let mut fields = Fields::new(&raw);
        Self {
            authorization_token: fields.string("authorizationToken"),
            redirect_url: fields.string("redirectUrl"),
            extra: fields.into_extra(),
            raw,
        }
    }
}

impl VidaasClient {
    /// Poll the authentications endpoint with an authorization code.
    ///
    /// Returns `Ok(None)` for any status other than 200, whatever the status
    /// policy; callers poll again later. Transport failures and an
    /// undecodable 200 body are still errors.
    pub async fn poll_authentication(
        &self,
        authorization_code: &str,
    ) -> Result<Option<AuthenticationResponse>> {
        let url = format!(
            "{}?code={authorization_code}",
            self.endpoint(AUTHENTICATIONS_PATH)
        );
        debug!("polling authentication");

        let response = send(self.http().get(url), "poll_authentication").await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(
                status = status.as_u16(),
                "failed to retrieve authentication"
            );
            return Ok(None);
        }

        decode(response, self.status_policy(), "poll_authentication")
            .await
            .map(Some)
    }
}
