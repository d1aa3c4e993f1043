use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dto::ErrorBody;
use spaceship_admin_service::{ServiceError, sea_orm::DbErr};

use crate::config::StatusPolicy;
use crate::status::{Operation, Outcome};

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// A failed endpoint call, already resolved to its status and `{error}` body
#[derive(Debug, thiserror::Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Store details are logged here and never reach the client.
    pub fn new(policy: StatusPolicy, operation: Operation, err: ServiceError) -> Self {
        let (outcome, message) = if err.is_not_found() {
            (Outcome::NotFound, err.to_string())
        } else {
            tracing::error!(?operation, error = %err, "store call failed");
            (Outcome::Failure, INTERNAL_SERVER_ERROR.to_owned())
        };

        Self {
            status: policy.status(operation, outcome),
            message,
        }
    }

    pub fn from_db(policy: StatusPolicy, operation: Operation, err: DbErr) -> Self {
        Self::new(policy, operation, ServiceError::Db(err))
    }

    /// Path or body that did not decode; the extractor's text becomes the `{error}`.
    pub fn rejected(policy: StatusPolicy, operation: Operation, reason: String) -> Self {
        tracing::warn!(?operation, %reason, "request rejected");

        Self {
            status: policy.status(operation, Outcome::Rejected),
            message: reason,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
