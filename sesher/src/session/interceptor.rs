use http::header::HeaderMap;

use crate::config::ResolvedSessionConfig;

use super::cookie::{AUTHENTICATED_MARKER, get_cookie_from_headers};
use super::types::{Session, SessionLocals};

/// Derive the session from the request's cookies.
///
/// The request is authenticated only when the cookie named by the config
/// holds exactly the authenticated marker.
pub fn session_from_headers(headers: &HeaderMap, config: &ResolvedSessionConfig) -> Session {
    let is_authenticated = get_cookie_from_headers(headers, config.cookie_name())
        .is_some_and(|value| value == AUTHENTICATED_MARKER);

    Session { is_authenticated }
}

/// Build the request-scoped state for one incoming request.
pub fn intercept(headers: &HeaderMap, config: ResolvedSessionConfig) -> SessionLocals {
    let session = session_from_headers(headers, &config);
    tracing::debug!(
        cookie_name = config.cookie_name(),
        is_authenticated = session.is_authenticated,
        "Session derived from request"
    );
    SessionLocals::new(session, config)
}
