use serde::Serialize;

use crate::config::ResolvedSessionConfig;

/// Authentication state of the current request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub is_authenticated: bool,
}

/// Request-scoped session state attached by the interceptor.
///
/// The resolved config is fixed when the record is built; later operations in
/// the same request can only read it. Host applications that keep their own
/// per-request record can embed this one and implement `AsRef<SessionLocals>`
/// to pass it straight to [`sign_in`](crate::sign_in) and
/// [`sign_out`](crate::sign_out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLocals {
    pub session: Session,
    config: ResolvedSessionConfig,
}

impl SessionLocals {
    pub fn new(session: Session, config: ResolvedSessionConfig) -> Self {
        Self { session, config }
    }

    pub fn config(&self) -> &ResolvedSessionConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }
}

impl AsRef<SessionLocals> for SessionLocals {
    fn as_ref(&self) -> &SessionLocals {
        self
    }
}

/// Body returned by the credential operations on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

impl SessionResponse {
    pub fn success() -> Self {
        Self { success: true }
    }
}
