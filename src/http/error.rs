use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::order_actor::OrderError;
use crate::plant_actor::PlantError;
use crate::user_actor::UserError;

/// Caller-facing failure classes. Each domain error maps onto one of these.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Conflict(String),
    /// The store did not answer; safe to retry.
    #[error("{0}")]
    Transient(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Transient(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

impl From<PlantError> for ApiError {
    fn from(e: PlantError) -> Self {
        let msg = e.to_string();
        match e {
            PlantError::NotFound(_) => ApiError::NotFound(msg),
            PlantError::InsufficientStock { .. } => ApiError::Conflict(msg),
            PlantError::InvalidQuantity(_) | PlantError::ValidationError(_) => ApiError::InvalidInput(msg),
            PlantError::ActorCommunicationError(_) => ApiError::Transient(msg),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        let msg = e.to_string();
        match e {
            OrderError::NotFound(_) | OrderError::PlantNotFound(_) => ApiError::NotFound(msg),
            OrderError::InsufficientStock { .. } => ApiError::Conflict(msg),
            OrderError::ValidationError(_) => ApiError::InvalidInput(msg),
            OrderError::ActorCommunicationError(_) => ApiError::Transient(msg),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        let msg = e.to_string();
        match e {
            UserError::NotFound(_) => ApiError::NotFound(msg),
            UserError::AlreadyRequested(_) => ApiError::Conflict(msg),
            UserError::ValidationError(_) => ApiError::InvalidInput(msg),
            UserError::ActorCommunicationError(_) => ApiError::Transient(msg),
        }
    }
}
