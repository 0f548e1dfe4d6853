//! Scripted collaborators that count calls.

#![allow(dead_code)]

use adminportal::workflow::{
    DocumentStore, Identity, IdentityProvider, ProviderError, StoreError,
};
use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

/// Identity provider returning a fixed outcome.
pub struct ScriptedProvider {
    outcome: Result<Identity, ProviderError>,
    pub authenticate_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn accepting(identity: &str) -> Self {
        Self::with_outcome(Ok(Identity::new(identity)))
    }

    pub fn rejecting(code: &str) -> Self {
        Self::with_outcome(Err(ProviderError::new(code)))
    }

    fn with_outcome(outcome: Result<Identity, ProviderError>) -> Self {
        Self {
            outcome,
            authenticate_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.authenticate_calls.load(Ordering::SeqCst) + self.register_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for ScriptedProvider {
    async fn authenticate(
        &self,
        _email: &str,
        _password: &SecretString,
    ) -> Result<Identity, ProviderError> {
        self.authenticate_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    async fn register(
        &self,
        _email: &str,
        _password: &SecretString,
    ) -> Result<Identity, ProviderError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Document store recording writes, optionally failing every call.
#[derive(Default)]
pub struct RecordingStore {
    documents: Mutex<HashMap<(String, String), Value>>,
    fail: bool,
    pub gets: AtomicUsize,
    pub sets: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_document(collection: &str, key: &str, value: Value) -> Self {
        let store = Self::new();
        if let Ok(mut documents) = store.documents.lock() {
            documents.insert((collection.to_string(), key.to_string()), value);
        }
        store
    }

    pub fn document(&self, collection: &str, key: &str) -> Option<Value> {
        self.documents
            .lock()
            .ok()?
            .get(&(collection.to_string(), key.to_string()))
            .cloned()
    }

    pub fn calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst) + self.sets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Backend("store unavailable".to_string()));
        }
        Ok(self.document(collection, key))
    }

    async fn set(&self, collection: &str, key: &str, value: Value) -> Result<(), StoreError> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Backend("store unavailable".to_string()));
        }
        if let Ok(mut documents) = self.documents.lock() {
            documents.insert((collection.to_string(), key.to_string()), value);
        }
        Ok(())
    }
}
