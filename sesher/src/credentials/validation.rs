use std::fmt;

use serde::{Deserialize, Serialize};

pub const PASSWORD_FIELD: &str = "password";

/// A validation problem tied to one input field, rendered next to that input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Sign-in form input. `_password` is accepted as the field name too.
#[derive(Clone, Default, Deserialize)]
pub struct SignInForm {
    #[serde(default, alias = "_password")]
    pub password: String,
}

impl SignInForm {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    pub fn validate(self) -> Result<Password, FieldIssue> {
        if self.password.is_empty() {
            return Err(FieldIssue::new(PASSWORD_FIELD, "Password is required"));
        }
        Ok(Password(self.password))
    }
}

impl fmt::Debug for SignInForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInForm")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A non-empty submitted password.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
