use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Seller status already requested: {0}")]
    AlreadyRequested(String),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(email) => UserError::NotFound(email),
            FrameworkError::Rejected(msg) | FrameworkError::AlreadyExists(msg) => {
                UserError::ValidationError(msg)
            }
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                UserError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
