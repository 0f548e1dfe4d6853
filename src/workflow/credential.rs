//! Form input for both flows and the local checks run before any network call.

use super::error::WorkflowError;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

/// Email and password as submitted by a form. `confirm_password` is only
/// filled in by the sign-up form.
#[derive(Debug, Clone)]
pub struct Credential {
    pub email: String,
    pub password: SecretString,
    pub confirm_password: Option<SecretString>,
}

impl Credential {
    #[must_use]
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            confirm_password: None,
        }
    }

    #[must_use]
    pub fn signup(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            confirm_password: Some(SecretString::from(confirm_password.into())),
        }
    }

    /// # Errors
    /// `InvalidFields` when the email is malformed or the password is empty.
    pub fn validate_login(&self) -> Result<(), WorkflowError> {
        if !valid_email(&self.email) || self.password.expose_secret().is_empty() {
            return Err(WorkflowError::InvalidFields);
        }

        Ok(())
    }

    /// Field checks come first; the equality check only runs on a complete form.
    ///
    /// # Errors
    /// `InvalidFields` for a malformed or incomplete form, `PasswordMismatch`
    /// when the confirmation differs from the password.
    pub fn validate_signup(&self) -> Result<(), WorkflowError> {
        self.validate_login()?;

        let confirm = match &self.confirm_password {
            Some(confirm) if !confirm.expose_secret().is_empty() => confirm,
            _ => return Err(WorkflowError::InvalidFields),
        };

        if confirm.expose_secret() != self.password.expose_secret() {
            return Err(WorkflowError::PasswordMismatch);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@b.com"));
        assert!(valid_email("admin.ops@portal.example.org"));
        assert!(!valid_email(""));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("no-at-sign.com"));
        assert!(!valid_email("two@@b.com"));
        assert!(!valid_email("spa ce@b.com"));
    }

    #[test]
    fn login_requires_password() {
        let credential = Credential::login("a@b.com", "");
        assert!(matches!(
            credential.validate_login(),
            Err(WorkflowError::InvalidFields)
        ));
        assert!(Credential::login("a@b.com", "secret1").validate_login().is_ok());
    }

    #[test]
    fn signup_requires_confirmation() {
        let mut credential = Credential::signup("a@b.com", "secret1", "");
        assert!(matches!(
            credential.validate_signup(),
            Err(WorkflowError::InvalidFields)
        ));

        credential.confirm_password = None;
        assert!(matches!(
            credential.validate_signup(),
            Err(WorkflowError::InvalidFields)
        ));
    }

    #[test]
    fn signup_detects_mismatch() {
        let credential = Credential::signup("a@b.com", "secret1", "secret2");
        assert!(matches!(
            credential.validate_signup(),
            Err(WorkflowError::PasswordMismatch)
        ));
        assert!(Credential::signup("a@b.com", "secret1", "secret1")
            .validate_signup()
            .is_ok());
    }

    #[test]
    fn invalid_email_wins_over_mismatch() {
        let credential = Credential::signup("not-an-email", "secret1", "secret2");
        assert!(matches!(
            credential.validate_signup(),
            Err(WorkflowError::InvalidFields)
        ));
    }

    #[test]
    fn debug_redacts_passwords() {
        let credential = Credential::signup("a@b.com", "hunter22", "hunter22");
        let debug = format!("{credential:?}");
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("hunter22"));
    }
}
