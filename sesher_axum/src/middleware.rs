use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{Next, from_fn_with_state},
    response::{IntoResponse, Response},
};

use sesher::{ResolvedSessionConfig, Session, SessionConfig};

use super::session::AuthRedirect;

/// Session interceptor.
///
/// Derives the session from the request cookie, attaches [`Session`] and
/// [`SessionLocals`](sesher::SessionLocals) to the request extensions and runs
/// the rest of the pipeline exactly once. The resolved config is closed over
/// as middleware state when the layer is built.
///
/// ```no_run
/// use axum::{Router, middleware::from_fn_with_state, routing::get};
/// use sesher::SessionConfig;
/// use sesher_axum::handle_session;
///
/// let app: Router = Router::new()
///     .route("/", get(|| async { "hello" }))
///     .layer(from_fn_with_state(
///         SessionConfig::default().with_cookie_name("auth").resolve(),
///         handle_session,
///     ));
/// ```
pub async fn handle_session(
    State(config): State<ResolvedSessionConfig>,
    mut req: Request,
    next: Next,
) -> Response {
    let locals = sesher::intercept(req.headers(), config);
    req.extensions_mut().insert(locals.session);
    req.extensions_mut().insert(locals);
    next.run(req).await
}

/// Installs the session interceptor on a router.
pub trait SessionRouterExt {
    /// Resolve `config` once and run [`handle_session`] in front of every route
    /// added so far.
    fn with_session(self, config: SessionConfig) -> Self;
}

impl<S> SessionRouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_session(self, config: SessionConfig) -> Self {
        self.layer(from_fn_with_state(config.resolve(), handle_session))
    }
}

fn is_authenticated(req: &Request) -> bool {
    match req.extensions().get::<Session>() {
        Some(session) => session.is_authenticated,
        None => {
            tracing::error!("Session guard used without the session interceptor");
            false
        }
    }
}

// Authentication guard with 401 response
pub async fn require_session_or_401(req: Request, next: Next) -> Response {
    if is_authenticated(&req) {
        next.run(req).await
    } else {
        tracing::debug!("Unauthorized");
        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}

// Authentication guard redirecting anonymous GETs to SESHER_REDIRECT_ANON
pub async fn require_session_or_redirect(req: Request, next: Next) -> Response {
    if is_authenticated(&req) {
        return next.run(req).await;
    }

    AuthRedirect::new(req.method().clone()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Extension,
        body::{Body, to_bytes},
        middleware::from_fn,
        routing::{get, post},
    };
    use crate::config::SESHER_REDIRECT_ANON;
    use http::header::{COOKIE, LOCATION};
    use sesher::SessionLocals;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tower::ServiceExt;

    fn get_request(uri: &str, cookie: Option<&str>) -> Request {
        let mut builder = http::Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn flag_app(config: SessionConfig) -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(session): Extension<Session>| async move {
                    session.is_authenticated.to_string()
                }),
            )
            .with_session(config)
    }

    #[tokio::test]
    async fn test_interceptor_without_cookie() {
        let response = flag_app(SessionConfig::default())
            .oneshot(get_request("/", None))
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "false");
    }

    #[tokio::test]
    async fn test_interceptor_with_marker_cookie() {
        let response = flag_app(SessionConfig::default())
            .oneshot(get_request("/", Some("session=authenticated")))
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "true");
    }

    #[tokio::test]
    async fn test_interceptor_with_other_value() {
        let response = flag_app(SessionConfig::default())
            .oneshot(get_request("/", Some("session=admin")))
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "false");
    }

    #[tokio::test]
    async fn test_interceptor_attaches_resolved_config() {
        let app = Router::new()
            .route(
                "/",
                get(|Extension(locals): Extension<SessionLocals>| async move {
                    format!(
                        "{}:{}:{}",
                        locals.config().env_key(),
                        locals.config().cookie_name(),
                        locals.config().max_age()
                    )
                }),
            )
            .with_session(SessionConfig::default().with_cookie_name("auth"));

        let response = app.oneshot(get_request("/", None)).await.unwrap();
        assert_eq!(body_string(response).await, "SESSION_PASSWORD:auth:604800");
    }

    #[tokio::test]
    async fn test_interceptor_calls_downstream_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let app = Router::new()
            .route(
                "/",
                get(move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        (StatusCode::ACCEPTED, "downstream")
                    }
                }),
            )
            .with_session(SessionConfig::default());

        let response = app.oneshot(get_request("/", None)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(body_string(response).await, "downstream");
    }

    fn guarded_app() -> Router {
        Router::new()
            .route(
                "/api",
                post(|| async { "ok" }).route_layer(from_fn(require_session_or_401)),
            )
            .route(
                "/page",
                get(|| async { "ok" })
                    .post(|| async { "ok" })
                    .route_layer(from_fn(require_session_or_redirect)),
            )
            .with_session(SessionConfig::default())
    }

    #[tokio::test]
    async fn test_guard_401_rejects_anonymous() {
        let request = http::Request::builder()
            .method("POST")
            .uri("/api")
            .body(Body::empty())
            .unwrap();
        let response = guarded_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_401_allows_authenticated() {
        let request = http::Request::builder()
            .method("POST")
            .uri("/api")
            .header(COOKIE, "session=authenticated")
            .body(Body::empty())
            .unwrap();
        let response = guarded_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_guard_redirect_for_anonymous_get() {
        let response = guarded_app()
            .oneshot(get_request("/page", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            SESHER_REDIRECT_ANON.as_str()
        );
    }

    #[tokio::test]
    async fn test_guard_redirect_answers_401_for_post() {
        let request = http::Request::builder()
            .method("POST")
            .uri("/page")
            .body(Body::empty())
            .unwrap();
        let response = guarded_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_redirect_matches_extractor_rejection() {
        for method in [http::Method::GET, http::Method::POST] {
            let request = http::Request::builder()
                .method(method.clone())
                .uri("/page")
                .body(Body::empty())
                .unwrap();
            let guarded = guarded_app().oneshot(request).await.unwrap();
            let rejected = AuthRedirect::new(method).into_response();

            assert_eq!(guarded.status(), rejected.status());
            assert_eq!(
                guarded.headers().get(LOCATION),
                rejected.headers().get(LOCATION)
            );
        }
    }

    #[tokio::test]
    async fn test_guard_without_interceptor_rejects() {
        let app: Router = Router::new().route(
            "/api",
            get(|| async { "ok" }).route_layer(from_fn(require_session_or_401)),
        );
        let response = app
            .oneshot(get_request("/api", Some("session=authenticated")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
