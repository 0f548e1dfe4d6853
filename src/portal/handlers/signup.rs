use super::{missing_payload, respond};
use crate::workflow::{Credential, FormSubmission, RedirectCapture, Workflow, WorkflowResult};
use axum::{extract::Extension, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    email: String,
    #[schema(format = Password)]
    password: String,
    #[schema(format = Password)]
    confirm_password: String,
}

impl From<SignupRequest> for Credential {
    fn from(request: SignupRequest) -> Self {
        Self::signup(request.email, request.password, request.confirm_password)
    }
}

#[utoipa::path(
    post,
    path= "/systemAdmin/signup",
    request_body = SignupRequest,
    responses (
        (status = 200, description = "Registered, redirect to login", body = WorkflowResult, content_type = "application/json"),
        (status = 400, description = "Missing or invalid fields, or passwords do not match", body = WorkflowResult),
        (status = 401, description = "Registration rejected by the identity provider", body = WorkflowResult),
        (status = 409, description = "Email already in use", body = WorkflowResult),
        (status = 502, description = "Authorization record could not be written", body = WorkflowResult),
    ),
    tag= "signup"
)]
#[instrument(skip(workflow, payload))]
pub async fn signup(
    workflow: Extension<Arc<Workflow>>,
    payload: Option<Json<SignupRequest>>,
) -> impl IntoResponse {
    let Some(Json(request)) = payload else {
        return missing_payload();
    };

    let credential = Credential::from(request);
    // one form instance per request
    let submission = FormSubmission::new();
    let navigator = RedirectCapture::new();

    let (result, err) = submission
        .submit(workflow.sign_up(&credential, &navigator))
        .await;

    respond(result, err, &navigator)
}
