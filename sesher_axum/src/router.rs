//! Router for the sign-in and sign-out endpoints

use axum::{Router, routing::post};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers::{sign_in, sign_out};

/// Create a router for the credential endpoints
///
/// Mount it under `SESHER_ROUTE_PREFIX` and install the session interceptor
/// around it; the handlers read the config the interceptor attaches:
/// - POST {SESHER_ROUTE_PREFIX}/sign-in
/// - POST {SESHER_ROUTE_PREFIX}/sign-out
pub fn session_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    session_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`session_router`] without the HTTP tracing middleware.
pub fn session_router_no_trace<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
}
