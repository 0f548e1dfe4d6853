//! # Adminportal (System Administrator Portal)
//!
//! `adminportal` gates access to the administrative portal. An administrator
//! signs up against a hosted identity provider, which issues an opaque
//! identity, and the portal writes a role record for that identity into a
//! document store. Logging in authenticates with the provider and then looks
//! the role record up: its presence is the only authorization predicate.
//!
//! ## Flows
//!
//! - **Sign-up:** validate locally, register with the provider, write the
//!   `system_admins` record, redirect to the login screen.
//! - **Login:** validate locally, authenticate with the provider, read the
//!   `system_admins` record, redirect to the dashboard or deny.
//!
//! Every failure ends the submission with a single user-facing message; there
//! are no retries.

pub mod backends;
pub mod chat;
pub mod cli;
pub mod portal;
pub mod workflow;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
