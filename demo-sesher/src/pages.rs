use askama::Template;
use axum::{
    Extension, Form, Router,
    http::StatusCode,
    middleware::from_fn,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

use sesher::{EnvSecret, Session, SessionError, SessionLocals, SignInForm};
use sesher_axum::{
    Authenticated, SESHER_ROUTE_PREFIX, SessionRejection, require_session_or_redirect,
};

pub(super) fn router() -> Router<()> {
    Router::new()
        .route("/", get(index).post(login))
        .route(
            "/members",
            get(members).route_layer(from_fn(require_session_or_redirect)),
        )
}

#[derive(Template)]
#[template(path = "index.j2")]
struct IndexTemplate<'a> {
    is_authenticated: bool,
    password_issue: Option<&'a str>,
    prefix: &'a str,
}

fn render(template: &impl Template, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn index(Extension(session): Extension<Session>) -> Response {
    let template = IndexTemplate {
        is_authenticated: session.is_authenticated,
        password_issue: None,
        prefix: SESHER_ROUTE_PREFIX.as_str(),
    };
    render(&template, StatusCode::OK)
}

// Progressive-enhancement sign in: field issues are rendered next to the input.
async fn login(
    Extension(locals): Extension<SessionLocals>,
    Form(form): Form<SignInForm>,
) -> Response {
    match sesher::sign_in(&locals, form, &EnvSecret) {
        Ok((headers, _)) => (headers, Redirect::to("/")).into_response(),
        Err(SessionError::Validation(issue)) => {
            let template = IndexTemplate {
                is_authenticated: locals.is_authenticated(),
                password_issue: Some(issue.message.as_str()),
                prefix: SESHER_ROUTE_PREFIX.as_str(),
            };
            render(&template, StatusCode::BAD_REQUEST)
        }
        Err(e) => SessionRejection::from(e).into_response(),
    }
}

#[derive(Template)]
#[template(path = "members.j2")]
struct MembersTemplate<'a> {
    max_age: u64,
    prefix: &'a str,
}

async fn members(auth: Authenticated) -> Response {
    let template = MembersTemplate {
        max_age: auth.locals().config().max_age(),
        prefix: SESHER_ROUTE_PREFIX.as_str(),
    };
    render(&template, StatusCode::OK)
}
