use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlantError {
    #[error("Plant not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Plant validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PlantError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => PlantError::NotFound(id),
            FrameworkError::Rejected(msg) | FrameworkError::AlreadyExists(msg) => {
                PlantError::ValidationError(msg)
            }
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                PlantError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
