use super::report;
use crate::{
    cli::globals::GlobalArgs,
    workflow::{Credential, FormSubmission, LogNavigator},
};
use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
}

/// Run the login flow once from the command line.
/// # Errors
/// Returns an error if the backends cannot be wired or access is denied.
pub async fn execute(args: Args) -> Result<()> {
    let workflow = args.globals.workflow().await?;

    let credential = Credential {
        email: args.email,
        password: args.password,
        confirm_password: None,
    };

    let submission = FormSubmission::new();
    let (result, err) = submission
        .submit(workflow.login(&credential, &LogNavigator))
        .await;

    report(&result, err)
}
