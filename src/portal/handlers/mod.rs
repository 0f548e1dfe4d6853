pub mod health;
pub use self::health::health;

pub mod signup;
pub use self::signup::signup;

pub mod login;
pub use self::login::login;

// common functions for the handlers
use crate::workflow::{RedirectCapture, WorkflowError, WorkflowResult};
use axum::{http::StatusCode, Json};

/// Turn a settled submission into a status code and body. The redirect
/// reported on success is the one the flow navigated to.
///
/// Every HTTP request is its own form instance, so requests are never gated
/// against each other and `Pending` only comes back from a caller that shares
/// a `FormSubmission` across submissions.
pub fn respond(
    result: WorkflowResult,
    err: Option<WorkflowError>,
    navigator: &RedirectCapture,
) -> (StatusCode, Json<WorkflowResult>) {
    match result {
        WorkflowResult::Success { redirect } => (
            StatusCode::OK,
            Json(WorkflowResult::Success {
                redirect: navigator.take().unwrap_or(redirect),
            }),
        ),
        WorkflowResult::Pending => (StatusCode::CONFLICT, Json(WorkflowResult::Pending)),
        denied @ WorkflowResult::Denied { .. } => (
            err.map_or(StatusCode::BAD_REQUEST, |e| e.status_code()),
            Json(denied),
        ),
    }
}

pub fn missing_payload() -> (StatusCode, Json<WorkflowResult>) {
    (
        StatusCode::BAD_REQUEST,
        Json(WorkflowResult::from_outcome(&Err(WorkflowError::InvalidFields))),
    )
}
