//! Error types for the HTTP boundary.
//!
//! Every failure is mapped to a status code here, once, and rendered as an
//! `ErrorDetail` body.

use hyper::StatusCode;
use thiserror::Error;

use crate::clients::log_gateway::LogGatewayError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not valid JSON.
    #[error("{0}")]
    MalformedBody(String),

    /// Body or query is valid syntax but does not match the expected schema.
    #[error("{0}")]
    Unprocessable(String),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Gateway(#[from] LogGatewayError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Gateway(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() {
            ApiError::Unprocessable(e.to_string())
        } else {
            ApiError::MalformedBody(e.to_string())
        }
    }
}
