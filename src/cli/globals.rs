use crate::{
    backends::{MemoryDocumentStore, MemoryIdentityProvider, PgDocumentStore, RestIdentityProvider},
    workflow::Workflow,
};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use std::{str::FromStr, sync::Arc};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Remote,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "remote" => Ok(Self::Remote),
            other => Err(anyhow!("unsupported backend: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub backend: Backend,
    pub identity_url: String,
    pub identity_api_key: SecretString,
    pub dsn: Option<String>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            identity_url: crate::backends::DEFAULT_IDENTITY_URL.to_string(),
            identity_api_key: SecretString::from(String::new()),
            dsn: None,
        }
    }

    pub fn set_api_key(&mut self, key: SecretString) {
        self.identity_api_key = key;
    }

    /// Wire the identity provider and document store for the selected backend.
    /// # Errors
    /// Returns an error if the provider cannot be built or the database is unreachable.
    pub async fn workflow(&self) -> Result<Workflow> {
        match self.backend {
            Backend::Memory => {
                warn!("Using the memory backend, accounts and records are lost on exit");

                Ok(Workflow::new(
                    Arc::new(MemoryIdentityProvider::new()),
                    Arc::new(MemoryDocumentStore::new()),
                ))
            }
            Backend::Remote => {
                let dsn = self
                    .dsn
                    .as_deref()
                    .context("missing required argument: --dsn")?;

                let provider =
                    RestIdentityProvider::new(&self.identity_url, self.identity_api_key.clone())?;

                let store = PgDocumentStore::connect(dsn).await?;
                store.migrate().await?;

                info!("Using identity provider {}", self.identity_url);

                Ok(Workflow::new(Arc::new(provider), Arc::new(store)))
            }
        }
    }
}
