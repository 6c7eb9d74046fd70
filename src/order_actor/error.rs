use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::plant_actor::PlantError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Plant not found: {0}")]
    PlantNotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Rejected(msg) | FrameworkError::AlreadyExists(msg) => {
                OrderError::ValidationError(msg)
            }
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                OrderError::ActorCommunicationError(e.to_string())
            }
        }
    }
}

impl From<PlantError> for OrderError {
    fn from(e: PlantError) -> Self {
        match e {
            PlantError::NotFound(id) => OrderError::PlantNotFound(id),
            PlantError::InsufficientStock { requested, available } => {
                OrderError::InsufficientStock { requested, available }
            }
            PlantError::InvalidQuantity(q) => {
                OrderError::ValidationError(format!("Invalid quantity: {}", q))
            }
            PlantError::ValidationError(msg) => OrderError::ValidationError(msg),
            PlantError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}
