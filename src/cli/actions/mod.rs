pub mod chat_token;
pub mod login;
pub mod server;
pub mod signup;

// Internal "interpreter" for `Action`.
mod run;

use crate::workflow::{WorkflowError, WorkflowResult};
use anyhow::{anyhow, Result};

#[derive(Debug)]
pub enum Action {
    Server(server::Args),
    Signup(signup::Args),
    Login(login::Args),
    ChatToken(chat_token::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Print a settled submission; a denial becomes the command's error.
fn report(result: &WorkflowResult, err: Option<WorkflowError>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);

    match (result, err) {
        (WorkflowResult::Success { .. }, _) => Ok(()),
        (_, Some(err)) => Err(anyhow!(err)),
        (WorkflowResult::Denied { message }, None) => Err(anyhow!(message.clone())),
        (WorkflowResult::Pending, None) => Err(anyhow!("submission still pending")),
    }
}
