//! Remote hash signing
//!
//! The caller computes the document digest locally and sends it with an
//! access token obtained through the authorization-code flow. The signing
//! key never leaves the provider.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::body::Fields;
use crate::client::VidaasClient;
use crate::constants::{FORMAT_CADES_AD_RB, SIGNATURES_PATH};
use crate::error::Result;

/// One digest to sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashToSign {
    pub id: String,
    /// Human-readable name of the content (usually the file name)
    pub alias: String,
    /// Digest value, as the caller encoded it
    pub hash: String,
    /// OID of the digest algorithm, e.g. [`SHA256_OID`](crate::constants::SHA256_OID)
    pub hash_algorithm: String,
    pub signature_format: String,
    pub base64_content: String,
    /// Sent as the string `"true"` / `"false"`
    #[serde(serialize_with = "bool_as_str")]
    pub pdf_signature_page: bool,
}

impl HashToSign {
    /// Digest with the default `CAdES_AD_RB` format and a PDF signature page.
    pub fn new(
        id: impl Into<String>,
        alias: impl Into<String>,
        hash: impl Into<String>,
        hash_algorithm: impl Into<String>,
        base64_content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            alias: alias.into(),
            hash: hash.into(),
            hash_algorithm: hash_algorithm.into(),
            signature_format: FORMAT_CADES_AD_RB.to_owned(),
            base64_content: base64_content.into(),
            pdf_signature_page: true,
        }
    }

    pub fn signature_format(mut self, format: impl Into<String>) -> Self {
        self.signature_format = format.into();
        self
    }

    pub fn pdf_signature_page(mut self, enabled: bool) -> Self {
        self.pdf_signature_page = enabled;
        self
    }
}

fn bool_as_str<S: Serializer>(value: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}

/// Signing request body: `{"hashes": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureRequest {
    pub hashes: Vec<HashToSign>,
}

impl SignatureRequest {
    /// Single-element request, the shape the provider's own clients send.
    pub fn single(hash: HashToSign) -> Self {
        Self { hashes: vec![hash] }
    }

    pub fn batch(hashes: impl IntoIterator<Item = HashToSign>) -> Self {
        Self {
            hashes: hashes.into_iter().collect(),
        }
    }
}

/// One signature produced by the provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Signature {
    pub id: Option<String>,
    pub raw_signature: Option<String>,
    /// Signed PDF, when a PAdES format or signature page was requested
    pub file_base64_signed: Option<String>,
    pub extra: Map<String, Value>,
    pub raw: Value,
}

impl From<Value> for Signature {
    fn from(raw: Value) -> Self {
        let mut fields = Fields::new(&raw);
        Self {
            id: fields.string("id"),
            raw_signature: fields.string("raw_signature"),
            file_base64_signed: fields.string("file_base64_signed"),
            extra: fields.into_extra(),
            raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct SignatureResponse {
    pub certificate_alias: Option<String>,
    pub signatures: Option<Vec<Signature>>,
    pub extra: Map<String, Value>,
    pub raw: Value,
}

impl From<Value> for SignatureResponse {
    fn from(raw: Value) -> Self {
        let mut fields = Fields::new(&raw);
        Self {
            certificate_alias: fields.string("certificate_alias"),
            signatures: fields.list("signatures"),
            extra: fields.into_extra(),
            raw,
        }
    }
}

impl VidaasClient {
    /// Submit digests for signature (`POST /valid/api/v1/trusted-services/signatures`).
    ///
    /// `access_token` is sent verbatim as `Authorization: Bearer {access_token}`.
    pub async fn sign(
        &self,
        access_token: &str,
        request: &SignatureRequest,
    ) -> Result<SignatureResponse> {
        debug!(hashes = request.hashes.len(), "submitting hashes for signature");

        let request = self
            .http()
            .post(self.endpoint(SIGNATURES_PATH))
            .bearer_auth(access_token)
            .json(request);
        self.execute(request, "sign").await
    }
}
