use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    clients::{content::ContentError, notification::NotifyError, payment::PaymentError},
    response::ApiResponse,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Content source error")]
    Content(#[from] ContentError),

    #[error("Notification error")]
    Notification(#[from] NotifyError),

    #[error("Payment intent error")]
    Payment(#[from] PaymentError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Content(ContentError::NotFound) => {
                (StatusCode::NOT_FOUND, "Not Found".to_string())
            }
            AppError::Content(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Notification(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            AppError::Payment(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = ApiResponse {
            message,
            data: Some(ErrorData {
                error: self.to_string(),
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
