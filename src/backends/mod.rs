//! Concrete identity providers and document stores.

pub mod memory;
pub mod postgres;
pub mod rest;

pub use self::memory::{MemoryDocumentStore, MemoryIdentityProvider};
pub use self::postgres::PgDocumentStore;
pub use self::rest::{RestIdentityProvider, DEFAULT_IDENTITY_URL};
