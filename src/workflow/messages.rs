//! Provider error code to user-facing message tables.
//!
//! One table per flow. Codes are matched with or without the `auth/`
//! namespace; anything not listed falls back to the flow's generic message.

use super::provider::normalize_code;
use std::fmt;

pub const FIELDS_INVALID: &str = "Please enter a valid email and fill in all required fields.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";
pub const NOT_AUTHORIZED: &str = "You are not authorized to access this portal.";

const SIGNUP_FALLBACK: &str = "Sign up failed. Please try again.";
const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

const SIGNUP_MESSAGES: &[(&str, &str)] = &[
    ("email-already-in-use", "Email already in use."),
    ("invalid-email", "Invalid email address."),
];

const LOGIN_MESSAGES: &[(&str, &str)] = &[
    ("user-not-found", "No account found with this email."),
    ("wrong-password", "Incorrect password."),
    ("invalid-email", "Invalid email address."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    SignUp,
    Login,
}

impl Flow {
    #[must_use]
    pub fn message_for(self, code: &str) -> &'static str {
        let code = normalize_code(code);
        let (table, fallback) = match self {
            Self::SignUp => (SIGNUP_MESSAGES, SIGNUP_FALLBACK),
            Self::Login => (LOGIN_MESSAGES, LOGIN_FALLBACK),
        };

        table
            .iter()
            .find(|(known, _)| *known == code)
            .map_or(fallback, |&(_, message)| message)
    }

    #[must_use]
    pub fn fallback(self) -> &'static str {
        match self {
            Self::SignUp => SIGNUP_FALLBACK,
            Self::Login => LOGIN_FALLBACK,
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignUp => write!(f, "signup"),
            Self::Login => write!(f, "login"),
        }
    }
}
