//! Document store boundary and the typed `system_admins` registry on top of it.

use super::provider::Identity;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

pub const SYSTEM_ADMINS: &str = "system_admins";
pub const ROLE_SYSTEM_ADMIN: &str = "system admin";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document store error: {0}")]
    Backend(String),

    #[error("malformed document {collection}/{key}: {source}")]
    Malformed {
        collection: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError>;

    async fn set(&self, collection: &str, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Evidence that an identity may access the portal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRecord {
    pub identifier: Identity,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl AuthorizationRecord {
    #[must_use]
    pub fn system_admin(identifier: Identity, email: impl Into<String>) -> Self {
        Self {
            identifier,
            email: email.into(),
            role: ROLE_SYSTEM_ADMIN.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Typed access to the `system_admins` collection, keyed by identity.
#[derive(Clone)]
pub struct AdminRegistry {
    store: Arc<dyn DocumentStore>,
}

impl AdminRegistry {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Whether a `system_admins` document exists for `identity`. The document
    /// body is not inspected.
    ///
    /// # Errors
    /// Returns an error if the store read fails.
    #[instrument(skip(self))]
    pub async fn exists(&self, identity: &Identity) -> Result<bool, StoreError> {
        Ok(self
            .store
            .get(SYSTEM_ADMINS, identity.as_str())
            .await?
            .is_some())
    }

    /// # Errors
    /// Returns an error if the store fails or the stored document does not
    /// decode as an `AuthorizationRecord`.
    #[instrument(skip(self))]
    pub async fn find(&self, identity: &Identity) -> Result<Option<AuthorizationRecord>, StoreError> {
        let Some(value) = self.store.get(SYSTEM_ADMINS, identity.as_str()).await? else {
            return Ok(None);
        };

        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                collection: SYSTEM_ADMINS.to_string(),
                key: identity.to_string(),
                source,
            })
    }

    /// # Errors
    /// Returns an error if the record cannot be encoded or the store write fails.
    #[instrument(skip(self, record), fields(identity = %record.identifier))]
    pub async fn insert(&self, record: &AuthorizationRecord) -> Result<(), StoreError> {
        let value = serde_json::to_value(record).map_err(|source| StoreError::Malformed {
            collection: SYSTEM_ADMINS.to_string(),
            key: record.identifier.to_string(),
            source,
        })?;

        self.store
            .set(SYSTEM_ADMINS, record.identifier.as_str(), value)
            .await
    }
}
