use super::{
    messages::{Flow, FIELDS_INVALID, NOT_AUTHORIZED, PASSWORDS_DO_NOT_MATCH},
    provider::{Identity, ProviderError},
    store::StoreError,
};
use axum::http::StatusCode;
use thiserror::Error;

/// Why a submission was denied.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("form fields are missing or invalid")]
    InvalidFields,

    #[error("password confirmation does not match")]
    PasswordMismatch,

    #[error("{flow} rejected by identity provider: {source}")]
    Provider {
        flow: Flow,
        #[source]
        source: ProviderError,
    },

    #[error("identity {identity} has no system admin record")]
    NotAuthorized { identity: Identity },

    #[error("{flow} failed in document store: {source}")]
    Store {
        flow: Flow,
        #[source]
        source: StoreError,
    },
}

impl WorkflowError {
    /// Message shown on the form.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidFields => FIELDS_INVALID,
            Self::PasswordMismatch => PASSWORDS_DO_NOT_MATCH,
            Self::Provider { flow, source } => flow.message_for(source.code()),
            Self::NotAuthorized { .. } => NOT_AUTHORIZED,
            Self::Store { flow, .. } => flow.fallback(),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidFields | Self::PasswordMismatch => StatusCode::BAD_REQUEST,
            Self::Provider { source, .. }
                if source.normalized_code() == "email-already-in-use" =>
            {
                StatusCode::CONFLICT
            }
            Self::Provider { .. } => StatusCode::UNAUTHORIZED,
            Self::NotAuthorized { .. } => StatusCode::FORBIDDEN,
            Self::Store { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}
