//! Central configuration for the sesher-axum crate

use std::sync::LazyLock;

/// Route prefix under which the sign-in and sign-out endpoints are mounted.
/// Default: "/session"
pub static SESHER_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESHER_ROUTE_PREFIX").unwrap_or_else(|_| "/session".to_string())
});

/// Where unauthenticated GET requests are sent by the redirecting guard.
/// Default: "/"
pub static SESHER_REDIRECT_ANON: LazyLock<String> =
    LazyLock::new(|| std::env::var("SESHER_REDIRECT_ANON").unwrap_or_else(|_| "/".to_string()));
