use axum::{ http::StatusCode, response::{ IntoResponse, Response }, Json };
use serde_json::json;
use thiserror::Error;

use crate::agent::Category;

/// Failure inside a category handler while building a reply.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to render {category} response: {reason}")] Render {
        category: Category,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind host '{0}'")] InvalidHost(String),
}

/// Errors surfaced by the HTTP layer. Each maps to a status code and a short JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No {0} provided")] MissingField(&'static str),
    #[error("Invalid request body: {0}")] InvalidBody(String),
    #[error("Endpoint not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
