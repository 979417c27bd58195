use headers::{Cookie, HeaderMapExt};
use http::header::{HeaderMap, HeaderValue, SET_COOKIE};

use super::errors::SessionError;

/// Cookie value marking an authenticated browser session.
pub const AUTHENTICATED_MARKER: &str = "authenticated";

const EXPIRED_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Returns the value of the cookie `cookie_name` from the request headers.
///
/// Multiple `Cookie` headers are merged; a malformed header counts as absent.
pub(crate) fn get_cookie_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let Some(cookies) = headers.typed_get::<Cookie>() else {
        tracing::trace!("No cookie header found");
        return None;
    };

    let value = cookies.get(cookie_name).map(str::to_string);
    if value.is_none() {
        tracing::trace!("No session cookie '{}' found in cookies", cookie_name);
    }
    value
}

/// Appends `Set-Cookie` for the session marker with the gate's fixed attributes.
pub(crate) fn header_set_cookie<'a>(
    headers: &'a mut HeaderMap,
    name: &str,
    value: &str,
    max_age: u64,
) -> Result<&'a HeaderMap, SessionError> {
    validate_cookie_name(name)?;
    let cookie =
        format!("{name}={value}; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age={max_age}");
    append_set_cookie(headers, cookie)
}

/// Appends `Set-Cookie` that removes the cookie at the site root.
pub(crate) fn header_delete_cookie<'a>(
    headers: &'a mut HeaderMap,
    name: &str,
) -> Result<&'a HeaderMap, SessionError> {
    validate_cookie_name(name)?;
    let cookie = format!(
        "{name}=; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age=0; Expires={EXPIRED_DATE}"
    );
    append_set_cookie(headers, cookie)
}

fn append_set_cookie(headers: &mut HeaderMap, cookie: String) -> Result<&HeaderMap, SessionError> {
    let value = HeaderValue::from_str(&cookie)
        .map_err(|_| SessionError::Cookie("Failed to parse cookie".to_string()))?;
    headers.append(SET_COOKIE, value);
    Ok(headers)
}

// Cookie names are RFC 6265 tokens.
fn validate_cookie_name(name: &str) -> Result<(), SessionError> {
    let is_token = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b));

    if is_token {
        Ok(())
    } else {
        Err(SessionError::Cookie(format!("Invalid cookie name: {name:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::COOKIE;

    fn cookie_headers(values: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(COOKIE, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    fn set_cookie_values(headers: &HeaderMap) -> Vec<String> {
        headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_get_cookie_from_headers() {
        let headers = cookie_headers(&["theme=dark; session=authenticated; lang=en"]);
        assert_eq!(
            get_cookie_from_headers(&headers, "session").as_deref(),
            Some("authenticated")
        );
        assert_eq!(get_cookie_from_headers(&headers, "missing"), None);
    }

    #[test]
    fn test_get_cookie_from_multiple_headers() {
        let headers = cookie_headers(&["theme=dark", "auth=authenticated"]);
        assert_eq!(
            get_cookie_from_headers(&headers, "auth").as_deref(),
            Some("authenticated")
        );
    }

    #[test]
    fn test_get_cookie_without_cookie_header() {
        assert_eq!(get_cookie_from_headers(&HeaderMap::new(), "session"), None);
    }

    #[test]
    fn test_header_set_cookie_attributes() {
        let mut headers = HeaderMap::new();
        header_set_cookie(&mut headers, "session", AUTHENTICATED_MARKER, 604800).unwrap();

        assert_eq!(
            set_cookie_values(&headers),
            vec![
                "session=authenticated; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age=604800"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_header_delete_cookie_attributes() {
        let mut headers = HeaderMap::new();
        header_delete_cookie(&mut headers, "auth").unwrap();

        let values = set_cookie_values(&headers);
        assert_eq!(values.len(), 1);
        assert!(values[0].starts_with("auth=;"));
        assert!(values[0].contains("Path=/"));
        assert!(values[0].contains("Max-Age=0"));
        assert!(values[0].contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn test_invalid_cookie_name_is_rejected() {
        for name in ["", "a b", "a;b", "a=b", "sé"] {
            let mut headers = HeaderMap::new();
            let result = header_set_cookie(&mut headers, name, AUTHENTICATED_MARKER, 60);
            assert!(
                matches!(result, Err(SessionError::Cookie(_))),
                "name {name:?} should be rejected"
            );
            assert!(headers.is_empty());
        }
    }
}
