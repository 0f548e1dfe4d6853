//! Client for the chat service token endpoint.
//!
//! `POST {base}/token {userId, name?}` returns `{token, apiKey}`. The call is a
//! plain passthrough: no auth, no retries, no error mapping.

use crate::APP_USER_AGENT;
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

pub const DEFAULT_CHAT_URL: &str = "http://localhost:3000";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatToken {
    pub token: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct ChatTokenClient {
    client: Client,
    token_url: Url,
}

impl ChatTokenClient {
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let token_url = Url::parse(base_url)
            .and_then(|url| url.join("/token"))
            .with_context(|| format!("Invalid chat URL: {base_url}"))?;

        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self { client, token_url })
    }

    /// Fetch a chat token for `user_id`.
    /// # Errors
    /// Returns an error if the request fails or the response is not a token.
    #[instrument(skip(self))]
    pub async fn fetch_token(&self, user_id: &str, name: Option<&str>) -> Result<ChatToken> {
        let response = self
            .client
            .post(self.token_url.clone())
            .json(&TokenRequest { user_id, name })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let json_response: Value = response.json().await.unwrap_or(Value::Null);

            return Err(anyhow!(
                "{} - {}, {}",
                self.token_url,
                status,
                json_response["error"].as_str().unwrap_or("")
            ));
        }

        let token: ChatToken = response
            .json()
            .await
            .context("Error parsing JSON response: expected token and apiKey")?;

        debug!("chat token issued for {}", user_id);

        Ok(token)
    }
}
