//! Server-side mirror of the client check

use std::fmt;

use serde::Deserialize;

use crate::error::MismatchError;
use crate::feedback::passwords_match;
use crate::messages::Messages;

/// A submitted change-password form.
///
/// Field names follow the element ids of the page, so an
/// `application/x-www-form-urlencoded` body deserializes directly.
#[derive(Clone, Deserialize)]
pub struct PasswordChange {
    pub username: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    /// Re-checks the confirmation with the default messages
    pub fn validate(&self) -> Result<(), MismatchError> {
        self.validate_with(&Messages::default())
    }

    pub fn validate_with(&self, messages: &Messages) -> Result<(), MismatchError> {
        if passwords_match(&self.new_password, &self.confirm_password) {
            Ok(())
        } else {
            Err(MismatchError {
                message: messages.submit_mismatch.clone(),
            })
        }
    }
}

/// Mask a secret for logs: length only, never content
fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("username", &self.username)
            .field("current_password", &mask(&self.current_password))
            .field("new_password", &mask(&self.new_password))
            .field("confirm_password", &mask(&self.confirm_password))
            .finish()
    }
}
