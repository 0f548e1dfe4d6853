use super::{chat_token, login, server, signup, Action};
use anyhow::Result;

pub(super) async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Server(args) => server::execute(args).await,
        Action::Signup(args) => signup::execute(args).await,
        Action::Login(args) => login::execute(args).await,
        Action::ChatToken(args) => chat_token::execute(args).await,
    }
}
