//! In-process identity provider and document store for local runs.
//!
//! State lives only as long as the process, so `--backend memory` is meant for
//! development and demos.

use crate::workflow::{
    valid_email, DocumentStore, Identity, IdentityProvider, ProviderError, StoreError,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use ulid::Ulid;

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug)]
struct Account {
    identity: Identity,
    password: SecretString,
}

#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account with a known identity.
    pub async fn insert_account(&self, email: &str, password: &str, identity: Identity) {
        self.accounts.write().await.insert(
            email.to_lowercase(),
            Account {
                identity,
                password: SecretString::from(password.to_string()),
            },
        );
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    #[instrument(skip(self, password))]
    async fn authenticate(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Identity, ProviderError> {
        if !valid_email(email) {
            return Err(ProviderError::new("invalid-email"));
        }

        let accounts = self.accounts.read().await;
        let account = accounts
            .get(&email.to_lowercase())
            .ok_or_else(|| ProviderError::new("user-not-found"))?;

        if account.password.expose_secret() != password.expose_secret() {
            return Err(ProviderError::new("wrong-password"));
        }

        Ok(account.identity.clone())
    }

    #[instrument(skip(self, password))]
    async fn register(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Identity, ProviderError> {
        if !valid_email(email) {
            return Err(ProviderError::new("invalid-email"));
        }

        if password.expose_secret().len() < MIN_PASSWORD_LENGTH {
            return Err(ProviderError::new("weak-password"));
        }

        let mut accounts = self.accounts.write().await;
        let key = email.to_lowercase();
        if accounts.contains_key(&key) {
            return Err(ProviderError::new("email-already-in-use"));
        }

        let identity = Identity::new(Ulid::new().to_string());
        debug!("issued identity {}", identity);

        accounts.insert(
            key,
            Account {
                identity: identity.clone(),
                password: password.clone(),
            },
        );

        Ok(identity)
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<(String, String), Value>>,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .documents
            .read()
            .await
            .get(&(collection.to_string(), key.to_string()))
            .cloned())
    }

    async fn set(&self, collection: &str, key: &str, value: Value) -> Result<(), StoreError> {
        self.documents
            .write()
            .await
            .insert((collection.to_string(), key.to_string()), value);

        Ok(())
    }
}
