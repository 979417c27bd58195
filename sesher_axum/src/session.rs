use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use http::{Method, StatusCode, request::Parts};

use sesher::SessionLocals;

use super::config::SESHER_REDIRECT_ANON;

pub struct AuthRedirect {
    method: Method,
}

impl AuthRedirect {
    pub(crate) fn new(method: Method) -> Self {
        Self { method }
    }

    fn into_response_with_method(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", SESHER_REDIRECT_ANON.as_str());
            Redirect::temporary(SESHER_REDIRECT_ANON.as_str()).into_response()
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        self.into_response_with_method()
    }
}

/// Proof that the request carries a valid session cookie, available as an
/// axum extractor behind the session interceptor.
///
/// Anonymous GET requests are redirected to `SESHER_REDIRECT_ANON`; other
/// methods get 401. Use `Option<Authenticated>` to branch instead of reject.
///
/// # Example
///
/// ```no_run
/// use axum::{Router, routing::get};
/// use sesher::SessionConfig;
/// use sesher_axum::{Authenticated, SessionRouterExt};
///
/// async fn members_only(_: Authenticated) -> &'static str {
///     "Welcome in"
/// }
///
/// let app: Router = Router::new()
///     .route("/members", get(members_only))
///     .with_session(SessionConfig::default());
/// ```
#[derive(Clone, Debug)]
pub struct Authenticated {
    locals: SessionLocals,
}

impl Authenticated {
    pub fn locals(&self) -> &SessionLocals {
        &self.locals
    }
}

impl AsRef<SessionLocals> for Authenticated {
    fn as_ref(&self) -> &SessionLocals {
        &self.locals
    }
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let Some(locals) = parts.extensions.get::<SessionLocals>() else {
            tracing::error!("Authenticated extractor used without the session interceptor");
            return Err(AuthRedirect::new(parts.method.clone()));
        };

        if !locals.is_authenticated() {
            return Err(AuthRedirect::new(parts.method.clone()));
        }

        Ok(Self {
            locals: locals.clone(),
        })
    }
}

impl<S> OptionalFromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <Authenticated as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
