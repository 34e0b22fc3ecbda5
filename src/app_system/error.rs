use thiserror::Error;

use crate::error::{EmployeeError, RegistryError};
use crate::room_actor::RoomError;

/// Errors raised while running or stopping the system itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorPanicked(String),
}

/// Everything the demo binary can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Employee(#[from] EmployeeError),
    #[error(transparent)]
    Room(#[from] RoomError),
    #[error(transparent)]
    System(#[from] SystemError),
}
