//! sesher - Shared-password session gate
//!
//! A single password, held in an environment variable, gates access to a web
//! application. A correct sign-in sets a marker cookie; every request derives
//! an `is_authenticated` flag from that cookie. There is no user identity and
//! no server-side session storage.
//!
//! This crate is framework-agnostic and works on `http` types. See
//! `sesher-axum` for the axum middleware and handlers.

mod config;
mod credentials;
mod session;

pub use config::{
    DEFAULT_COOKIE_NAME, DEFAULT_ENV_KEY, DEFAULT_MAX_AGE, ResolvedSessionConfig, SessionConfig,
};

pub use credentials::{
    EnvSecret, FieldIssue, PASSWORD_FIELD, Password, SecretSource, SignInForm, sign_in, sign_out,
};

pub use session::{
    AUTHENTICATED_MARKER, Session, SessionError, SessionLocals, SessionResponse, intercept,
    session_from_headers,
};
