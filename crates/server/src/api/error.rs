//! HTTP error mapping.
//!
//! Every error leaves the service as `{ "error": "<message>" }`. Storage
//! detail is logged, never surfaced.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::RepoError;
use crate::use_cases::ServiceError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Map a use-case failure to an entity-specific response, mirroring the
/// per-entity error catalog ("player not found", "invalid award id", ...).
pub fn entity_error(entity: &str, err: ServiceError) -> ApiError {
    match err {
        ServiceError::Repo(RepoError::NotFound) => {
            ApiError::NotFound(format!("{entity} not found"))
        }
        ServiceError::Repo(RepoError::InvalidId) => {
            ApiError::BadRequest(format!("invalid {entity} id"))
        }
        ServiceError::InvalidPageSize => {
            ApiError::BadRequest(format!("invalid page size for listing {entity}"))
        }
        ServiceError::InvalidPageNumber => {
            ApiError::BadRequest(format!("invalid page number for listing {entity}"))
        }
        ServiceError::Repo(RepoError::Database(detail)) => ApiError::Internal(detail),
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(RepoError::NotFound) => ApiError::NotFound("not found".into()),
            ServiceError::Repo(RepoError::InvalidId) => ApiError::BadRequest("invalid id".into()),
            ServiceError::InvalidPageSize => ApiError::BadRequest("invalid page size".into()),
            ServiceError::InvalidPageNumber => {
                ApiError::BadRequest("invalid page number".into())
            }
            ServiceError::Repo(RepoError::Database(detail)) => ApiError::Internal(detail),
        }
    }
}
