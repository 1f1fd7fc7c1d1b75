use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("screenshot provider error: {0}")]
    Upstream(String),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // User-correctable, surfaced verbatim.
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            // Upstream detail stays in the log; clients get a generic message.
            AppError::Upstream(msg) => {
                tracing::error!(detail = %msg, "upstream screenshot fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to analyze website. Please try another URL.".to_string(),
                )
            }
            AppError::Decode(msg) | AppError::Export(msg) | AppError::Config(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
