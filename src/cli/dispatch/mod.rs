//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action the binary executes.

use crate::cli::{
    actions::{chat_token, login, server, signup, Action},
    commands::{backend, CMD_CHAT_TOKEN, CMD_LOGIN, CMD_SERVER, CMD_SIGNUP},
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let options = backend::Options::parse(matches)?;

    let mut globals = GlobalArgs::new(options.backend);
    globals.identity_url = options.identity_url;
    globals.dsn = options.dsn;
    globals.set_api_key(options.identity_api_key);

    match matches.subcommand() {
        Some((CMD_SERVER, sub_m)) => Ok(Action::Server(server::Args {
            globals,
            port: sub_m.get_one::<u16>("port").copied().unwrap_or(8080),
            frontend_origin: sub_m.get_one::<String>("frontend-origin").cloned(),
        })),
        Some((CMD_SIGNUP, sub_m)) => Ok(Action::Signup(signup::Args {
            globals,
            email: required(sub_m, "email")?,
            password: SecretString::from(required(sub_m, "password")?),
            confirm_password: SecretString::from(required(sub_m, "confirm-password")?),
        })),
        Some((CMD_LOGIN, sub_m)) => Ok(Action::Login(login::Args {
            globals,
            email: required(sub_m, "email")?,
            password: SecretString::from(required(sub_m, "password")?),
        })),
        Some((CMD_CHAT_TOKEN, sub_m)) => Ok(Action::ChatToken(chat_token::Args {
            chat_url: required(sub_m, "chat-url")?,
            user_id: required(sub_m, "user-id")?,
            name: sub_m.get_one::<String>("name").cloned(),
        })),
        _ => Err(anyhow!("missing subcommand")),
    }
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}
