//! Navigation sink used on success.

use std::sync::Mutex;
use tracing::info;

pub const LOGIN_ROUTE: &str = "/systemAdmin/login";
pub const SIGNUP_ROUTE: &str = "/systemAdmin/signup";
pub const DASHBOARD_ROUTE: &str = "/systemAdmin/dashboard";

pub trait Navigator: Send + Sync {
    /// Fire-and-forget redirect.
    fn navigate(&self, path: &str);
}

/// Keeps the last requested path so a caller can report it after the flow settles.
#[derive(Debug, Default)]
pub struct RedirectCapture {
    target: Mutex<Option<String>>,
}

impl RedirectCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the captured path, leaving the capture empty.
    #[must_use]
    pub fn take(&self) -> Option<String> {
        self.target
            .lock()
            .map_or(None, |mut target| target.take())
    }
}

impl Navigator for RedirectCapture {
    fn navigate(&self, path: &str) {
        if let Ok(mut target) = self.target.lock() {
            *target = Some(path.to_string());
        }
    }
}

/// Writes the redirect to the log; used where there is no screen to change.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        info!(path, "navigate");
    }
}
