use thiserror::Error;

use crate::credentials::FieldIssue;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The environment variable holding the shared password is unset or empty.
    /// The variable name is kept for server-side logging and never rendered.
    #[error("Server configuration error")]
    Configuration { env_key: String },

    #[error("{0}")]
    Validation(FieldIssue),

    #[error("Cookie error: {0}")]
    Cookie(String),
}

impl From<FieldIssue> for SessionError {
    fn from(issue: FieldIssue) -> Self {
        Self::Validation(issue)
    }
}
