use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde_json::json;

use sesher::SessionError;

/// HTTP rendering of a failed credential operation.
///
/// Field issues become a 400 the page can render next to the input; every
/// other failure is a generic 500 that never names the missing variable.
#[derive(Debug)]
pub struct SessionRejection(pub SessionError);

impl From<SessionError> for SessionRejection {
    fn from(err: SessionError) -> Self {
        Self(err)
    }
}

impl SessionRejection {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            SessionError::Validation(_) => StatusCode::BAD_REQUEST,
            SessionError::Configuration { .. } | SessionError::Cookie(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.0 {
            SessionError::Validation(issue) => json!({
                "success": false,
                "issues": [issue],
            }),
            SessionError::Configuration { .. } => json!({
                "success": false,
                "error": "Server configuration error",
            }),
            SessionError::Cookie(msg) => {
                tracing::error!("Failed to build session cookie: {}", msg);
                json!({
                    "success": false,
                    "error": "Internal server error",
                })
            }
        };
        (status, Json(body)).into_response()
    }
}
