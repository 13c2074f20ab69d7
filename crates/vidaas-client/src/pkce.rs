//! PKCE (Proof Key for Code Exchange) per RFC 7636
//!
//! The challenge goes into the authorization URL; the verifier stays with
//! the caller until the authorization code is exchanged for a token.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;
use sha2::{Digest, Sha256};

/// Bytes of randomness behind each verifier.
const VERIFIER_BYTES: usize = 32;

/// A code verifier and its S256 challenge.
#[derive(Clone, PartialEq, Eq)]
pub struct PkcePair {
    pub verifier: String,
    pub challenge: String,
}

impl PkcePair {
    /// Rebuild a pair from a verifier the caller kept between requests.
    pub fn from_verifier(verifier: impl Into<String>) -> Self {
        let verifier = verifier.into();
        let challenge = compute_challenge(&verifier);
        Self {
            verifier,
            challenge,
        }
    }
}

impl fmt::Debug for PkcePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PkcePair")
            .field("verifier", &"[REDACTED]")
            .field("challenge", &self.challenge)
            .finish()
    }
}

/// Generate a fresh verifier/challenge pair.
pub fn generate_pkce_pair() -> PkcePair {
    PkcePair::from_verifier(generate_verifier())
}

/// Generate a cryptographically random PKCE code verifier.
///
/// 32 random bytes, URL-safe base64 without padding: 43 characters, the
/// RFC 7636 minimum length.
pub fn generate_verifier() -> String {
    let mut bytes = [0u8; VERIFIER_BYTES];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// `challenge = BASE64URL(SHA256(verifier))`
pub fn compute_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}
