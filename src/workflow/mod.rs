//! Credential-gated admin bootstrap.
//!
//! Flow Overview:
//! 1) Validate the form locally; nothing leaves the process on failure.
//! 2) Register or authenticate with the identity provider.
//! 3) Write (sign-up) or read (login) the `system_admins` record for the identity.
//! 4) Navigate on success; otherwise settle with a single denial message.

pub mod credential;
pub mod error;
pub mod login;
pub mod messages;
pub mod navigation;
pub mod provider;
pub mod result;
pub mod signup;
pub mod store;
pub mod submission;

pub use self::credential::{valid_email, Credential};
pub use self::error::WorkflowError;
pub use self::messages::Flow;
pub use self::navigation::{
    LogNavigator, Navigator, RedirectCapture, DASHBOARD_ROUTE, LOGIN_ROUTE, SIGNUP_ROUTE,
};
pub use self::provider::{Identity, IdentityProvider, ProviderError};
pub use self::result::{RequestState, WorkflowResult};
pub use self::store::{AdminRegistry, AuthorizationRecord, DocumentStore, StoreError};
pub use self::submission::FormSubmission;

use std::sync::Arc;

/// The two pipelines and the collaborators they share.
#[derive(Clone)]
pub struct Workflow {
    provider: Arc<dyn IdentityProvider>,
    registry: AdminRegistry,
}

impl Workflow {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            provider,
            registry: AdminRegistry::new(store),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &AdminRegistry {
        &self.registry
    }
}
