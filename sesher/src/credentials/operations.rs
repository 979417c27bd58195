use http::header::HeaderMap;
use subtle::ConstantTimeEq;

use crate::session::{
    AUTHENTICATED_MARKER, SessionError, SessionLocals, SessionResponse, header_delete_cookie,
    header_set_cookie,
};

use super::secret::SecretSource;
use super::validation::{FieldIssue, PASSWORD_FIELD, SignInForm};

/// Verify the submitted password against the shared secret and, on a match,
/// produce the `Set-Cookie` header that authenticates the browser.
///
/// # Arguments
/// * `locals` - Request-scoped state attached by the interceptor
/// * `form` - The submitted sign-in form
/// * `secrets` - Where the shared password is looked up, by the configured `env_key`
///
/// # Returns
/// * `Ok((headers, response))` - Exactly one `Set-Cookie` header and `{ success: true }`
/// * `Err(SessionError::Validation)` - Empty or wrong password, no cookie written
/// * `Err(SessionError::Configuration)` - The secret is unset or empty
#[tracing::instrument(skip_all)]
pub fn sign_in<L, S>(
    locals: &L,
    form: SignInForm,
    secrets: &S,
) -> Result<(HeaderMap, SessionResponse), SessionError>
where
    L: AsRef<SessionLocals> + ?Sized,
    S: SecretSource + ?Sized,
{
    let password = form.validate()?;
    let config = locals.as_ref().config();

    let expected = match secrets.secret(config.env_key()) {
        Some(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::error!(
                "Environment variable \"{}\" is not set.",
                config.env_key()
            );
            return Err(SessionError::Configuration {
                env_key: config.env_key().to_string(),
            });
        }
    };

    let matches: bool = password
        .as_str()
        .as_bytes()
        .ct_eq(expected.as_bytes())
        .into();
    if !matches {
        tracing::debug!("Sign-in rejected: password mismatch");
        return Err(FieldIssue::new(PASSWORD_FIELD, "Password is wrong").into());
    }

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        config.cookie_name(),
        AUTHENTICATED_MARKER,
        config.max_age(),
    )?;

    tracing::debug!(cookie_name = config.cookie_name(), "Signed in");
    Ok((headers, SessionResponse::success()))
}

/// Produce the `Set-Cookie` header that clears the session cookie.
///
/// Succeeds regardless of whether the request was authenticated.
#[tracing::instrument(skip_all)]
pub fn sign_out<L>(locals: &L) -> Result<(HeaderMap, SessionResponse), SessionError>
where
    L: AsRef<SessionLocals> + ?Sized,
{
    let config = locals.as_ref().config();

    let mut headers = HeaderMap::new();
    header_delete_cookie(&mut headers, config.cookie_name())?;

    tracing::debug!(cookie_name = config.cookie_name(), "Signed out");
    Ok((headers, SessionResponse::success()))
}
