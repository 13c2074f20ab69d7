//! VIDaaS endpoint paths and protocol defaults
//!
//! Paths are relative to the provider base URI (for example
//! `https://certificado.vidaas.com.br`). The OAuth endpoints live under
//! `/v0/oauth`, the trusted-services endpoints under `/valid/api/v1`.

/// Client application registration
pub const APPLICATION_PATH: &str = "/v0/oauth/application";

/// Client-credentials token endpoint
pub const CLIENT_TOKEN_PATH: &str = "/v0/oauth/client_token";

/// Authorization endpoint (QR code / push flow entry point)
pub const AUTHORIZE_PATH: &str = "/v0/oauth/authorize";

/// Authorization-code token endpoint
pub const TOKEN_PATH: &str = "/v0/oauth/token";

/// User discovery by CPF/CNPJ
pub const USER_DISCOVERY_PATH: &str = "/v0/oauth/user-discovery";

/// Authentication polling
pub const AUTHENTICATIONS_PATH: &str = "/valid/api/v1/trusted-services/authentications";

/// Remote hash signing
pub const SIGNATURES_PATH: &str = "/valid/api/v1/trusted-services/signatures";

/// Scope for a single signature per authorization
pub const SCOPE_SINGLE_SIGNATURE: &str = "single_signature";

/// Scope for a signing session bounded by `lifetime`
pub const SCOPE_SIGNATURE_SESSION: &str = "signature_session";

/// Only S256 is supported by the provider.
pub const CODE_CHALLENGE_METHOD: &str = "S256";

/// CMS advanced signature, basic reference profile
pub const FORMAT_CADES_AD_RB: &str = "CAdES_AD_RB";

/// Raw CMS signature
pub const FORMAT_CMS: &str = "CMS";

/// PDF advanced signature, basic reference profile
pub const FORMAT_PADES_AD_RB: &str = "PAdES_AD_RB";

/// OID of SHA-256, the hash algorithm the provider expects by default
pub const SHA256_OID: &str = "2.16.840.1.101.3.4.2.1";
