//! Submission outcomes and the per-form request state.

use super::error::WorkflowError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of one submission of either flow.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WorkflowResult {
    /// A submission from the same form is still in flight.
    Pending,
    Success { redirect: String },
    Denied { message: String },
}

impl WorkflowResult {
    #[must_use]
    pub fn from_outcome(outcome: &Result<&'static str, WorkflowError>) -> Self {
        match outcome {
            Ok(redirect) => Self::Success {
                redirect: (*redirect).to_string(),
            },
            Err(err) => Self::Denied {
                message: err.user_message().to_string(),
            },
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Lifecycle of one form instance.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded {
        redirect: String,
    },
    Failed {
        message: String,
    },
}

impl RequestState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<&WorkflowResult> for RequestState {
    fn from(result: &WorkflowResult) -> Self {
        match result {
            WorkflowResult::Pending => Self::Pending,
            WorkflowResult::Success { redirect } => Self::Succeeded {
                redirect: redirect.clone(),
            },
            WorkflowResult::Denied { message } => Self::Failed {
                message: message.clone(),
            },
        }
    }
}
