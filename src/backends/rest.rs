//! Identity provider client for Identity-Toolkit style REST endpoints.
//!
//! `POST {base}/v1/accounts:signUp?key=...` and
//! `POST {base}/v1/accounts:signInWithPassword?key=...` both answer with a
//! `localId` on success and `{"error": {"message": "EMAIL_EXISTS"}}` on
//! rejection. Rejection messages are normalised to the provider code
//! vocabulary used by the message tables.

use crate::{
    workflow::{Identity, IdentityProvider, ProviderError},
    APP_USER_AGENT,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, instrument};
use url::Url;

pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com";

const SIGN_UP: &str = "/v1/accounts:signUp";
const SIGN_IN: &str = "/v1/accounts:signInWithPassword";

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
}

#[derive(Debug)]
pub struct RestIdentityProvider {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl RestIdentityProvider {
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: SecretString) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid identity URL: {base_url}"))?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .context("Failed to build identity provider client")?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ProviderError> {
        let mut url = self.base_url.join(path).map_err(|e| {
            error!("Error building identity endpoint: {:?}", e);

            ProviderError::network()
        })?;

        url.query_pairs_mut()
            .append_pair("key", self.api_key.expose_secret());

        Ok(url)
    }

    async fn call(
        &self,
        path: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<Identity, ProviderError> {
        let url = self.endpoint(path)?;

        let payload = json!({
            "email": email,
            "password": password.expose_secret(),
            "returnSecureToken": true,
        });

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Error calling identity provider: {:?}", e);

                ProviderError::network()
            })?;

        let status = response.status();

        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body["error"]["message"].as_str().unwrap_or("");

            debug!("identity provider answered {}: {}", status, message);

            return Err(ProviderError::new(provider_code(message)));
        }

        let account: AccountResponse = response.json().await.map_err(|e| {
            error!("Error parsing identity provider response: {:?}", e);

            ProviderError::new("internal-error")
        })?;

        Ok(Identity::new(account.local_id))
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    #[instrument(skip(self, password))]
    async fn authenticate(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Identity, ProviderError> {
        self.call(SIGN_IN, email, password).await
    }

    #[instrument(skip(self, password))]
    async fn register(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Identity, ProviderError> {
        self.call(SIGN_UP, email, password).await
    }
}

/// Map a REST rejection message (`EMAIL_EXISTS`, `WEAK_PASSWORD : ...`) to a provider code.
#[must_use]
pub fn provider_code(message: &str) -> String {
    let head = message.split(" : ").next().unwrap_or("").trim();

    match head {
        "EMAIL_EXISTS" => "email-already-in-use".to_string(),
        "EMAIL_NOT_FOUND" => "user-not-found".to_string(),
        "INVALID_PASSWORD" => "wrong-password".to_string(),
        "INVALID_EMAIL" => "invalid-email".to_string(),
        "USER_DISABLED" => "user-disabled".to_string(),
        "" => "internal-error".to_string(),
        other => other.to_lowercase().replace('_', "-"),
    }
}
