use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::models::resource::ResourceId;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("malformed request path: {0}")]
    MalformedPath(String),
    #[error("{subject} not found")]
    NotFound { subject: String },
}

impl RequestError {
    pub fn resource_not_found(id: ResourceId) -> Self {
        Self::NotFound {
            subject: format!("resource with id {id}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{field}` is missing or empty")]
    MissingField { field: &'static str },
}

impl From<JsonRejection> for RequestError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for RequestError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedPath(rejection.body_text())
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::MalformedBody(_) | Self::MalformedPath(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        debug!("rejecting request with {status}: {self}");
        let body = json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
