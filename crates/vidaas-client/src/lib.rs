//! VIDaaS cloud signature API client
//!
//! Thin async bindings for the VIDaaS OAuth and trusted-services endpoints:
//! application registration, PKCE authorization, token exchange, user
//! discovery and remote hash signing. Every network operation is a single
//! request on [`VidaasClient`]; nothing is cached or stored between calls.
//!
//! Typical flow:
//! 1. `register_application()` once, keep the issued `ClientCredentials`
//! 2. `pkce::generate_pkce_pair()`, then `authorization_url()` with the challenge
//! 3. The user approves on their device; the provider redirects with a code
//! 4. `poll_authentication()` until it returns `Some` (optional)
//! 5. `exchange_code_for_token()` with the code and the PKCE verifier
//! 6. `sign()` with the access token
//!
//! Error bodies from the provider are returned as data by default. Use
//! [`StatusPolicy::Strict`] to turn non-2xx responses into errors.

pub mod application;
pub mod authorize;
mod body;
pub mod client;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod discovery;
pub mod error;
mod http;
pub mod pkce;
pub mod signing;
pub mod token;

#[cfg(test)]
mod test_support;

pub use application::{RegisterApplication, RegistrationResponse};
pub use authorize::{AuthenticationResponse, AuthorizationParams, build_authorization_url};
pub use client::{StatusPolicy, VidaasClient};
pub use config::Config;
pub use credentials::ClientCredentials;
pub use discovery::{DiscoveryResponse, IdType, Slot, UserIdentifier};
pub use error::{Error, Result};
pub use pkce::{PkcePair, compute_challenge, generate_pkce_pair, generate_verifier};
pub use signing::{HashToSign, Signature, SignatureRequest, SignatureResponse};
pub use token::{CodeExchange, TokenResponse};
