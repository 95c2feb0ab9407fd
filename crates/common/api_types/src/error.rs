use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::responses::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing API key")]
    MissingApiKey,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Api Endpoint Not Found: {0}")]
    NotFound(String),

    /// An upstream node or provider failed; carries the failure's message verbatim.
    #[error("{0}")]
    Upstream(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::MissingApiKey | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
