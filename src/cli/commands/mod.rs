pub mod backend;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const CMD_SERVER: &str = "server";
pub const CMD_SIGNUP: &str = "signup";
pub const CMD_LOGIN: &str = "login";
pub const CMD_CHAT_TOKEN: &str = "chat-token";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("adminportal")
        .about("System administrator portal")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(server())
        .subcommand(credential_command(
            CMD_SIGNUP,
            "Register a system admin and write its authorization record",
        ))
        .subcommand(credential_command(
            CMD_LOGIN,
            "Authenticate a system admin and check its authorization record",
        ))
        .subcommand(chat_token());

    let command = backend::with_args(command);
    logging::with_args(command)
}

fn server() -> Command {
    Command::new(CMD_SERVER)
        .about("Serve the sign-up and login API")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("ADMINPORTAL_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("frontend-origin")
                .long("frontend-origin")
                .help("Front-end base URL allowed by CORS, example: https://portal.tld")
                .env("ADMINPORTAL_FRONTEND_ORIGIN"),
        )
}

fn credential_command(name: &'static str, about: &'static str) -> Command {
    let command = Command::new(name)
        .about(about)
        .arg(
            Arg::new("email")
                .long("email")
                .help("Administrator email")
                .env("ADMINPORTAL_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .help("Administrator password")
                .env("ADMINPORTAL_PASSWORD")
                .hide_env_values(true)
                .required(true),
        );

    if name == CMD_SIGNUP {
        command.arg(
            Arg::new("confirm-password")
                .long("confirm-password")
                .help("Password confirmation, must match --password")
                .env("ADMINPORTAL_CONFIRM_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
    } else {
        command
    }
}

fn chat_token() -> Command {
    Command::new(CMD_CHAT_TOKEN)
        .about("Fetch a chat token for a user")
        .arg(
            Arg::new("chat-url")
                .long("chat-url")
                .help("Chat token service base URL")
                .env("ADMINPORTAL_CHAT_URL")
                .default_value(crate::chat::DEFAULT_CHAT_URL),
        )
        .arg(
            Arg::new("user-id")
                .long("user-id")
                .help("User identifier the token is issued for")
                .required(true),
        )
        .arg(Arg::new("name").long("name").help("Display name"))
}
