use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request-level failures. The `Display` text is the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Player not found")]
    NotFound,
    #[error("Invalid data. Please provide a name and a numeric score.")]
    InvalidData,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidData => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Plain text, no structured error object
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn not_found_is_plain_text_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn invalid_data_is_400() {
        assert_eq!(ApiError::InvalidData.status(), StatusCode::BAD_REQUEST);
    }
}
