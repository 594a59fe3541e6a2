use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::dtos::blog::MessageResponse;
use crate::repositories::StoreError;

/// Request-scoped error taxonomy. Validation and not-found carry the exact
/// message returned to the caller; every fault from the document or file
/// store collapses to a generic 500 with the detail logged server-side.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("store fault: {0}")]
    Store(#[from] StoreError),
    #[error("file store fault: {0}")]
    File(#[from] std::io::Error),
    #[error("upload fault: {0}")]
    Upload(#[from] actix_multipart::MultipartError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::File(_) | ApiError::Upload(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) => msg.clone(),
            other => {
                error!("{}", other);
                "Server error".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(MessageResponse { message })
    }
}
