use super::handlers::{health, login, signup};
use crate::workflow::WorkflowResult;
use utoipa::OpenApi;

/// Add new endpoints to `paths(...)` so they show up in the served document.
#[derive(OpenApi)]
#[openapi(
    paths(health::health, signup::signup, login::login),
    components(schemas(signup::SignupRequest, login::LoginRequest, WorkflowResult)),
    tags(
        (name = "health", description = "Liveness and build information"),
        (name = "signup", description = "System admin registration"),
        (name = "login", description = "System admin authentication and authorization"),
    )
)]
pub struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
