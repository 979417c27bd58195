//! sesher-axum - Axum integration for the sesher shared-password session gate
//!
//! ```no_run
//! use axum::{Extension, Router, routing::get};
//! use sesher::{Session, SessionConfig};
//! use sesher_axum::{SESHER_ROUTE_PREFIX, SessionRouterExt, session_router};
//!
//! async fn index(Extension(session): Extension<Session>) -> String {
//!     format!("authenticated: {}", session.is_authenticated)
//! }
//!
//! let app: Router = Router::new()
//!     .route("/", get(index))
//!     .nest(SESHER_ROUTE_PREFIX.as_str(), session_router())
//!     .with_session(SessionConfig::default());
//! ```

mod config;
mod error;
mod handlers;
mod middleware;
mod router;
mod session;

pub use config::{SESHER_REDIRECT_ANON, SESHER_ROUTE_PREFIX};
pub use error::SessionRejection;
pub use middleware::{
    SessionRouterExt, handle_session, require_session_or_401, require_session_or_redirect,
};
pub use router::{session_router, session_router_no_trace};
pub use session::{AuthRedirect, Authenticated};

pub use sesher::{
    ResolvedSessionConfig, Session, SessionConfig, SessionError, SessionLocals, SessionResponse,
};
