use crate::{backends::DEFAULT_IDENTITY_URL, cli::globals::Backend};
use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_BACKEND: &str = "backend";
pub const ARG_IDENTITY_URL: &str = "identity-url";
pub const ARG_IDENTITY_API_KEY: &str = "identity-api-key";
pub const ARG_DSN: &str = "dsn";

#[derive(Debug)]
pub struct Options {
    pub backend: Backend,
    pub identity_url: String,
    pub identity_api_key: SecretString,
    pub dsn: Option<String>,
}

impl Options {
    /// # Errors
    /// Returns an error if the remote backend is selected without an API key or DSN.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let backend = matches
            .get_one::<String>(ARG_BACKEND)
            .map_or(Ok(Backend::Memory), |value| value.parse())?;

        let identity_url = matches
            .get_one::<String>(ARG_IDENTITY_URL)
            .cloned()
            .unwrap_or_else(|| DEFAULT_IDENTITY_URL.to_string());

        let identity_api_key = matches.get_one::<String>(ARG_IDENTITY_API_KEY).cloned();
        let dsn = matches.get_one::<String>(ARG_DSN).cloned();

        if backend == Backend::Remote {
            if identity_api_key.is_none() {
                return Err(anyhow!(
                    "Missing required argument: --{ARG_IDENTITY_API_KEY} (required for the remote backend)"
                ));
            }
            if dsn.is_none() {
                return Err(anyhow!(
                    "Missing required argument: --{ARG_DSN} (required for the remote backend)"
                ));
            }
        }

        Ok(Self {
            backend,
            identity_url,
            identity_api_key: SecretString::from(identity_api_key.unwrap_or_default()),
            dsn,
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BACKEND)
                .long("backend")
                .help("Identity provider and document store backend")
                .long_help(
                    "Identity provider and document store backend. `memory` keeps accounts and records in the process and loses them on exit; `remote` uses the REST identity provider and the Postgres document store.",
                )
                .env("ADMINPORTAL_BACKEND")
                .global(true)
                .default_value("memory")
                .value_parser(["memory", "remote"]),
        )
        .arg(
            Arg::new(ARG_IDENTITY_URL)
                .long("identity-url")
                .help("Identity provider base URL")
                .env("ADMINPORTAL_IDENTITY_URL")
                .global(true)
                .default_value(DEFAULT_IDENTITY_URL),
        )
        .arg(
            Arg::new(ARG_IDENTITY_API_KEY)
                .long("identity-api-key")
                .help("Identity provider API key")
                .env("ADMINPORTAL_IDENTITY_API_KEY")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new(ARG_DSN)
                .short('d')
                .long("dsn")
                .help("Document store connection string")
                .env("ADMINPORTAL_DSN")
                .hide_env_values(true)
                .global(true),
        )
}
