mod common;

use adminportal::workflow::{
    store::SYSTEM_ADMINS, AuthorizationRecord, Credential, FormSubmission, Identity,
    RedirectCapture, RequestState, Workflow, WorkflowError, WorkflowResult, DASHBOARD_ROUTE,
    LOGIN_ROUTE,
};
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use common::{RecordingStore, ScriptedProvider};
use serde_json::json;
use std::sync::Arc;

fn workflow(provider: &Arc<ScriptedProvider>, store: &Arc<RecordingStore>) -> Workflow {
    Workflow::new(provider.clone(), store.clone())
}

fn admin_document(identifier: &str, email: &str) -> Result<serde_json::Value> {
    let record = AuthorizationRecord::system_admin(Identity::new(identifier), email);
    Ok(serde_json::to_value(record)?)
}

fn denied(message: &str) -> WorkflowResult {
    WorkflowResult::Denied {
        message: message.to_string(),
    }
}

#[tokio::test]
async fn signup_registers_and_writes_record() -> Result<()> {
    let provider = Arc::new(ScriptedProvider::accepting("U1"));
    let store = Arc::new(RecordingStore::new());
    let navigator = RedirectCapture::new();
    let before = Utc::now();

    let credential = Credential::signup("a@b.com", "secret1", "secret1");
    let (result, err) = FormSubmission::new()
        .submit(workflow(&provider, &store).sign_up(&credential, &navigator))
        .await;

    assert!(err.is_none());
    assert_eq!(
        result,
        WorkflowResult::Success {
            redirect: "/systemAdmin/login".to_string()
        }
    );
    assert_eq!(navigator.take().as_deref(), Some(LOGIN_ROUTE));

    let document = store
        .document(SYSTEM_ADMINS, "U1")
        .context("record not written")?;
    let record: AuthorizationRecord = serde_json::from_value(document)?;
    assert_eq!(record.identifier, Identity::new("U1"));
    assert_eq!(record.email, "a@b.com");
    assert_eq!(record.role, "system admin");
    assert!(record.created_at >= before);
    assert!(record.created_at <= Utc::now() + Duration::seconds(1));

    assert_eq!(provider.calls(), 1);
    assert_eq!(store.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn signup_mismatch_makes_no_calls() {
    let provider = Arc::new(ScriptedProvider::accepting("U1"));
    let store = Arc::new(RecordingStore::new());
    let navigator = RedirectCapture::new();

    let credential = Credential::signup("a@b.com", "secret1", "secret2");
    let (result, _) = FormSubmission::new()
        .submit(workflow(&provider, &store).sign_up(&credential, &navigator))
        .await;

    assert_eq!(result, denied("Passwords do not match."));
    assert_eq!(provider.calls(), 0);
    assert_eq!(store.calls(), 0);
    assert_eq!(navigator.take(), None);
}

#[tokio::test]
async fn invalid_email_never_reaches_provider() {
    let provider = Arc::new(ScriptedProvider::accepting("U1"));
    let store = Arc::new(RecordingStore::new());
    let flows = workflow(&provider, &store);
    let navigator = RedirectCapture::new();

    for email in ["", "plain", "a@b", "a b@c.com", "@b.com"] {
        let signup = flows
            .sign_up(&Credential::signup(email, "secret1", "secret1"), &navigator)
            .await;
        assert!(matches!(signup, Err(WorkflowError::InvalidFields)), "{email}");

        let login = flows
            .login(&Credential::login(email, "secret1"), &navigator)
            .await;
        assert!(matches!(login, Err(WorkflowError::InvalidFields)), "{email}");
    }

    assert_eq!(provider.calls(), 0);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn signup_email_in_use() {
    let provider = Arc::new(ScriptedProvider::rejecting("email-already-in-use"));
    let store = Arc::new(RecordingStore::new());
    let navigator = RedirectCapture::new();

    let credential = Credential::signup("a@b.com", "secret1", "secret1");
    let (result, _) = FormSubmission::new()
        .submit(workflow(&provider, &store).sign_up(&credential, &navigator))
        .await;

    assert_eq!(result, denied("Email already in use."));
    assert_eq!(provider.calls(), 1);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn signup_unknown_code_is_generic() {
    let provider = Arc::new(ScriptedProvider::rejecting("auth/operation-not-allowed"));
    let store = Arc::new(RecordingStore::new());

    let credential = Credential::signup("a@b.com", "secret1", "secret1");
    let result = workflow(&provider, &store)
        .sign_up(&credential, &RedirectCapture::new())
        .await;

    let message = result.err().map(|e| e.user_message());
    assert_eq!(message, Some("Sign up failed. Please try again."));
}

#[tokio::test]
async fn signup_record_write_failure_is_generic() {
    let provider = Arc::new(ScriptedProvider::accepting("U9"));
    let store = Arc::new(RecordingStore::failing());
    let navigator = RedirectCapture::new();

    let credential = Credential::signup("a@b.com", "secret1", "secret1");
    let submission = FormSubmission::new();
    let (result, err) = submission
        .submit(workflow(&provider, &store).sign_up(&credential, &navigator))
        .await;

    assert_eq!(result, denied("Sign up failed. Please try again."));
    assert!(matches!(err, Some(WorkflowError::Store { .. })));
    assert_eq!(store.sets.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(navigator.take(), None);
    assert_eq!(
        submission.state(),
        RequestState::Failed {
            message: "Sign up failed. Please try again.".to_string()
        }
    );
}

#[tokio::test]
async fn login_with_record_reaches_dashboard() -> Result<()> {
    let provider = Arc::new(ScriptedProvider::accepting("U1"));
    let store = Arc::new(RecordingStore::with_document(
        SYSTEM_ADMINS,
        "U1",
        admin_document("U1", "a@b.com")?,
    ));
    let navigator = RedirectCapture::new();

    let credential = Credential::login("a@b.com", "secret1");
    let (result, _) = FormSubmission::new()
        .submit(workflow(&provider, &store).login(&credential, &navigator))
        .await;

    assert_eq!(
        result,
        WorkflowResult::Success {
            redirect: "/systemAdmin/dashboard".to_string()
        }
    );
    assert_eq!(navigator.take().as_deref(), Some(DASHBOARD_ROUTE));
    assert_eq!(provider.authenticate_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(store.gets.load(std::sync::atomic::Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn login_accepts_record_without_timestamp() {
    let provider = Arc::new(ScriptedProvider::accepting("U1"));
    let store = Arc::new(RecordingStore::with_document(
        SYSTEM_ADMINS,
        "U1",
        json!({ "identifier": "U1", "email": "a@b.com", "role": "system admin" }),
    ));
    let navigator = RedirectCapture::new();

    let credential = Credential::login("a@b.com", "secret1");
    let (result, err) = FormSubmission::new()
        .submit(workflow(&provider, &store).login(&credential, &navigator))
        .await;

    assert!(err.is_none());
    assert_eq!(
        result,
        WorkflowResult::Success {
            redirect: "/systemAdmin/dashboard".to_string()
        }
    );
    assert_eq!(navigator.take().as_deref(), Some(DASHBOARD_ROUTE));
}

#[tokio::test]
async fn login_without_record_is_denied() -> Result<()> {
    let provider = Arc::new(ScriptedProvider::accepting("U2"));
    let store = Arc::new(RecordingStore::with_document(
        SYSTEM_ADMINS,
        "U1",
        admin_document("U1", "a@b.com")?,
    ));
    let navigator = RedirectCapture::new();

    let credential = Credential::login("c@d.com", "secret1");
    let (result, err) = FormSubmission::new()
        .submit(workflow(&provider, &store).login(&credential, &navigator))
        .await;

    assert_eq!(result, denied("You are not authorized to access this portal."));
    assert!(matches!(
        err,
        Some(WorkflowError::NotAuthorized { identity }) if identity == Identity::new("U2")
    ));
    assert_eq!(navigator.take(), None);
    Ok(())
}

#[tokio::test]
async fn login_wrong_password() {
    let provider = Arc::new(ScriptedProvider::rejecting("wrong-password"));
    let store = Arc::new(RecordingStore::new());

    let credential = Credential::login("a@b.com", "nope123");
    let (result, _) = FormSubmission::new()
        .submit(workflow(&provider, &store).login(&credential, &RedirectCapture::new()))
        .await;

    assert_eq!(result, denied("Incorrect password."));
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn login_store_failure_is_generic() {
    let provider = Arc::new(ScriptedProvider::accepting("U1"));
    let store = Arc::new(RecordingStore::failing());

    let credential = Credential::login("a@b.com", "secret1");
    let (result, _) = FormSubmission::new()
        .submit(workflow(&provider, &store).login(&credential, &RedirectCapture::new()))
        .await;

    assert_eq!(result, denied("Login failed. Please try again."));
}

#[tokio::test]
async fn login_ignores_unrelated_collections() {
    let provider = Arc::new(ScriptedProvider::accepting("U1"));
    let store = Arc::new(RecordingStore::with_document(
        "customers",
        "U1",
        json!({ "identifier": "U1" }),
    ));

    let credential = Credential::login("a@b.com", "secret1");
    let result = workflow(&provider, &store)
        .login(&credential, &RedirectCapture::new())
        .await;

    assert!(matches!(result, Err(WorkflowError::NotAuthorized { .. })));
}
