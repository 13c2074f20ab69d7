//! User discovery by CPF/CNPJ
//!
//! Tells the caller whether a person or company holds a cloud certificate
//! with the provider, and which certificate slots are available.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::body::Fields;
use crate::client::VidaasClient;
use crate::constants::USER_DISCOVERY_PATH;
use crate::credentials::ClientCredentials;
use crate::error::Result;

/// Kind of Brazilian taxpayer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdType {
    /// Natural person
    Cpf,
    /// Legal entity
    Cnpj,
}

impl IdType {
    pub fn as_str(self) -> &'static str {
        match self {
            IdType::Cpf => "CPF",
            IdType::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPF or CNPJ to look up. The value is sent as given, without checksum validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentifier {
    pub id_type: IdType,
    pub value: String,
}

impl UserIdentifier {
    pub fn cpf(value: impl Into<String>) -> Self {
        Self {
            id_type: IdType::Cpf,
            value: value.into(),
        }
    }

    pub fn cnpj(value: impl Into<String>) -> Self {
        Self {
            id_type: IdType::Cnpj,
            value: value.into(),
        }
    }
}

#[derive(Serialize)]
struct DiscoveryBody<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    user_cpf_cnpj: IdType,
    val_cpf_cnpj: &'a str,
}

/// Certificate slot held by the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Slot {
    pub slot_alias: Option<String>,
    pub label: Option<String>,
    pub extra: Map<String, Value>,
    pub raw: Value,
}

impl From<Value> for Slot {
    fn from(raw: Value) -> Self {
        let mut fields = Fields::new(&raw);
        Self {
            slot_alias: fields.string("slot_alias"),
            label: fields.string("label"),
            extra: fields.into_extra(),
            raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct DiscoveryResponse {
    /// `"S"` when the user was found
    pub status: Option<String>,
    pub slots: Option<Vec<Slot>>,
    pub extra: Map<String, Value>,
    pub raw: Value,
}

impl From<Value> for DiscoveryResponse {
    fn from(raw: Value) -> Self {
        let mut fields = Fields::new(&raw);
        Self {
            status: fields.string("status"),
            slots: fields.list("slots"),
            extra: fields.into_extra(),
            raw,
        }
    }
}

impl VidaasClient {
    /// Look up a user by CPF/CNPJ (`POST /v0/oauth/user-discovery`).
    pub async fn discover_user(
        &self,
        credentials: &ClientCredentials,
        user: &UserIdentifier,
    ) -> Result<DiscoveryResponse> {
        debug!(id_type = %user.id_type, "discovering user");

        let body = DiscoveryBody {
            client_id: &credentials.client_id,
            client_secret: credentials.secret(),
            user_cpf_cnpj: user.id_type,
            val_cpf_cnpj: &user.value,
        };
        let request = self
            .http()
            .post(self.endpoint(USER_DISCOVERY_PATH))
            .json(&body);
        self.execute(request, "discover_user").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockResponse, start_mock_provider};

    #[test]
    fn id_type_wire_names() {
        assert_eq!(serde_json::to_value(IdType::Cpf).unwrap(), "CPF");
        assert_eq!(serde_json::to_value(IdType::Cnpj).unwrap(), "CNPJ");
        assert_eq!(IdType::Cnpj.to_string(), "CNPJ");
    }

    #[tokio::test]
    async fn cpf_lookup_maps_to_wire_fields() {
        let (base, requests) = start_mock_provider(MockResponse::ok(
            r#"{"status":"S","slots":[{"slot_alias":"a1b2c3","label":"ANDRE CERUTTI"}]}"#,
        ))
        .await;
        let client = VidaasClient::new(base);
        let creds = ClientCredentials::new("4c9fb552-0387-4e5f-8727-6676fa88dce1", "Ny2n3hq67gQEFvH7");

        let response = client
            .discover_user(&creds, &UserIdentifier::cpf("12345678901"))
            .await
            .unwrap();
        assert_eq!(response.status.as_deref(), Some("S"));
        let slots = response.slots.unwrap();
        assert_eq!(slots[0].slot_alias.as_deref(), Some("a1b2c3"));
        assert_eq!(slots[0].label.as_deref(), Some("ANDRE CERUTTI"));

        let recorded = requests.lock().unwrap();
        let req = &recorded[0];
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/v0/oauth/user-discovery");
        assert_eq!(
            req.json(),
            serde_json::json!({
                "client_id": "4c9fb552-0387-4e5f-8727-6676fa88dce1",
                "client_secret": "Ny2n3hq67gQEFvH7",
                "user_cpf_cnpj": "CPF",
                "val_cpf_cnpj": "12345678901",
            })
        );
    }

    #[tokio::test]
    async fn cnpj_not_found_is_returned_as_data() {
        let (base, requests) =
            start_mock_provider(MockResponse::new(404, r#"{"status":"N"}"#)).await;
        let client = VidaasClient::new(base);
        let creds = ClientCredentials::new("cid", "secret");

        let response = client
            .discover_user(&creds, &UserIdentifier::cnpj("12345678000199"))
            .await
            .unwrap();
        assert_eq!(response.status.as_deref(), Some("N"));
        assert!(response.slots.is_none());

        let body = requests.lock().unwrap()[0].json();
        assert_eq!(body["user_cpf_cnpj"], "CNPJ");
        assert_eq!(body["val_cpf_cnpj"], "12345678000199");
    }

    #[tokio::test]
    async fn numeric_status_error_is_returned_as_data() {
        let (base, _requests) = start_mock_provider(MockResponse::new(
            400,
            r#"{"timestamp":"2026-10-19T12:00:00.000+00:00","status":400,"error":"Bad Request","message":"invalid cpf"}"#,
        ))
        .await;
        let client = VidaasClient::new(base);
        let creds = ClientCredentials::new("cid", "secret");

        let response = client
            .discover_user(&creds, &UserIdentifier::cpf("000"))
            .await
            .unwrap();
        assert!(response.status.is_none());
        assert!(response.slots.is_none());
        assert_eq!(response.extra["status"], 400);
        assert_eq!(response.extra["message"], "invalid cpf");
        assert_eq!(response.raw["error"], "Bad Request");
    }
}
