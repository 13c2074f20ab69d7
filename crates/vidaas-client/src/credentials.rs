//! Client application credentials
//!
//! Issued by the provider when an application is registered. The library
//! never stores them; callers thread them through each call that needs them.

use common::Secret;

/// `client_id` / `client_secret` pair. The secret is redacted in Debug output.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: Secret<String>,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret.into()),
        }
    }

    pub(crate) fn secret(&self) -> &str {
        self.client_secret.expose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secret_but_shows_client_id() {
        let creds = ClientCredentials::new("4c9fb552-0387-4e5f-8727-6676fa88dce1", "Ny2n3hq67gQEFvH7");
        let debug = format!("{creds:?}");
        assert!(debug.contains("4c9fb552-0387-4e5f-8727-6676fa88dce1"));
        assert!(!debug.contains("Ny2n3hq67gQEFvH7"), "{debug}");
        assert_eq!(creds.secret(), "Ny2n3hq67gQEFvH7");
    }
}
