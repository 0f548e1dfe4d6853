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
    pub confirm_password: SecretString,
}

/// Run the sign-up flow once from the command line.
/// # Errors
/// Returns an error if the backends cannot be wired or the sign-up is denied.
pub async fn execute(args: Args) -> Result<()> {
    let workflow = args.globals.workflow().await?;

    let credential = Credential {
        email: args.email,
        password: args.password,
        confirm_password: Some(args.confirm_password),
    };

    let submission = FormSubmission::new();
    let (result, err) = submission
        .submit(workflow.sign_up(&credential, &LogNavigator))
        .await;

    report(&result, err)
}
