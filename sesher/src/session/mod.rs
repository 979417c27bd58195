mod cookie;
mod errors;
mod interceptor;
mod types;

pub use cookie::AUTHENTICATED_MARKER;
pub use errors::SessionError;
pub use interceptor::{intercept, session_from_headers};
pub use types::{Session, SessionLocals, SessionResponse};

pub(crate) use cookie::{header_delete_cookie, header_set_cookie};
