use crate::{cli::globals::GlobalArgs, portal};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub port: u16,
    pub frontend_origin: Option<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the backends cannot be wired or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let workflow = Arc::new(args.globals.workflow().await?);

    debug!("backend: {:?}", args.globals.backend);

    portal::new(args.port, workflow, args.frontend_origin.as_deref()).await
}
