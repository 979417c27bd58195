use axum::{
    Extension, Form, Json,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use http::HeaderMap;
use serde::Deserialize;

use sesher::{
    EnvSecret, ResolvedSessionConfig, Session, SessionLocals, SessionResponse, SignInForm,
};

use super::error::SessionRejection;

#[derive(Deserialize)]
pub(super) struct RedirectQuery {
    redirect: Option<String>,
}

/// Form-based sign in.
///
/// Expects `application/x-www-form-urlencoded` with a `password` field and
/// answers `{"success": true}` plus the session cookie, a 400 carrying the
/// field issue, or a generic 500 when the shared password is not configured.
pub(super) async fn sign_in(
    locals: Option<Extension<SessionLocals>>,
    Form(form): Form<SignInForm>,
) -> Result<(HeaderMap, Json<SessionResponse>), SessionRejection> {
    let locals = locals_or_default(locals);
    let (headers, response) = sesher::sign_in(&locals, form, &EnvSecret)?;
    Ok((headers, Json(response)))
}

/// Signs out by clearing the session cookie.
///
/// With `?redirect=/some/path` the deletion cookie rides on a 303 redirect
/// instead of the JSON body. Only same-site paths are followed.
pub(super) async fn sign_out(
    locals: Option<Extension<SessionLocals>>,
    Query(params): Query<RedirectQuery>,
) -> Result<Response, SessionRejection> {
    let locals = locals_or_default(locals);
    let (headers, response) = sesher::sign_out(&locals)?;

    match params.redirect.filter(|to| is_local_path(to)) {
        Some(redirect_to) => {
            tracing::debug!("Redirecting to {}", redirect_to);
            Ok((headers, Redirect::to(&redirect_to)).into_response())
        }
        None => Ok((headers, Json(response)).into_response()),
    }
}

// Without the interceptor the handlers run with the default config.
fn locals_or_default(locals: Option<Extension<SessionLocals>>) -> SessionLocals {
    match locals {
        Some(Extension(locals)) => locals,
        None => {
            tracing::warn!("Session interceptor not installed; using the default session config");
            SessionLocals::new(Session::default(), ResolvedSessionConfig::default())
        }
    }
}

// Same-site absolute paths made of visible ASCII only. Whitespace and control
// characters are dropped by browsers, which can turn "/\t/host" into "//host".
fn is_local_path(to: &str) -> bool {
    let local = to.starts_with('/')
        && !to.starts_with("//")
        && to.bytes().all(|b| b.is_ascii_graphic() && b != b'\\');
    if !local {
        tracing::warn!("Ignoring non-local sign-out redirect: {:?}", to);
    }
    local
}
