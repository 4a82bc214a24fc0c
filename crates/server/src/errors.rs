use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Request-level failures. Each variant is pinned to one status code and a
/// fixed user-visible message; the JSON body shape is the same for all of
/// them: `{"success": false, "error": <code>, "message": <string>}`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("resource not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("unprocessable")]
    Unprocessable,
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_messages_are_fixed() {
        assert_eq!(ApiError::BadRequest.status().as_u16(), 400);
        assert_eq!(ApiError::NotFound.status().as_u16(), 404);
        assert_eq!(ApiError::MethodNotAllowed.status().as_u16(), 405);
        assert_eq!(ApiError::Unprocessable.status().as_u16(), 422);
        assert_eq!(ApiError::Internal.status().as_u16(), 500);

        assert_eq!(ApiError::NotFound.to_string(), "resource not found");
        assert_eq!(ApiError::Unprocessable.to_string(), "unprocessable");
        assert_eq!(ApiError::Internal.to_string(), "internal server error");
    }
}
