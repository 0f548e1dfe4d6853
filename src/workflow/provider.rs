//! Identity provider boundary.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Code used when the provider could not be reached at all.
pub const NETWORK_REQUEST_FAILED: &str = "network-request-failed";

const CODE_NAMESPACE: &str = "auth/";

/// Strip a single leading `auth/` namespace from a provider code.
#[must_use]
pub fn normalize_code(code: &str) -> &str {
    code.strip_prefix(CODE_NAMESPACE).unwrap_or(code)
}

/// Opaque identifier issued by the identity provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejection from the identity provider, carrying its code vocabulary
/// (`user-not-found`, `wrong-password`, `invalid-email`, `email-already-in-use`, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("identity provider rejected the request: {code}")]
pub struct ProviderError {
    code: String,
}

impl ProviderError {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    #[must_use]
    pub fn network() -> Self {
        Self::new(NETWORK_REQUEST_FAILED)
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The code with its `auth/` namespace removed, as matched by the message tables.
    #[must_use]
    pub fn normalized_code(&self) -> &str {
        normalize_code(&self.code)
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify an existing credential.
    async fn authenticate(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Identity, ProviderError>;

    /// Create a new credential.
    async fn register(&self, email: &str, password: &SecretString)
        -> Result<Identity, ProviderError>;
}
