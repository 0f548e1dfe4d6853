use super::{missing_payload, respond};
use crate::workflow::{Credential, FormSubmission, RedirectCapture, Workflow, WorkflowResult};
use axum::{extract::Extension, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize)]
pub struct LoginRequest {
    email: String,
    #[schema(format = Password)]
    password: String,
}

impl From<LoginRequest> for Credential {
    fn from(request: LoginRequest) -> Self {
        Self::login(request.email, request.password)
    }
}

#[utoipa::path(
    post,
    path= "/systemAdmin/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Authorized, redirect to dashboard", body = WorkflowResult, content_type = "application/json"),
        (status = 400, description = "Missing or invalid fields", body = WorkflowResult),
        (status = 401, description = "Credential rejected by the identity provider", body = WorkflowResult),
        (status = 403, description = "Authenticated but not a system admin", body = WorkflowResult),
        (status = 502, description = "Authorization record could not be read", body = WorkflowResult),
    ),
    tag= "login"
)]
#[instrument(skip(workflow, payload))]
pub async fn login(
    workflow: Extension<Arc<Workflow>>,
    payload: Option<Json<LoginRequest>>,
) -> impl IntoResponse {
    let Some(Json(request)) = payload else {
        return missing_payload();
    };

    let credential = Credential::from(request);
    // one form instance per request
    let submission = FormSubmission::new();
    let navigator = RedirectCapture::new();

    let (result, err) = submission
        .submit(workflow.login(&credential, &navigator))
        .await;

    respond(result, err, &navigator)
}
