use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during room operations.
///
/// A taken seat is not one of them: reservations report that as `false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    NotFound(String),
    #[error("Invalid room: {0}")]
    InvalidRoom(String),
    #[error("Unexpected result from room actor")]
    UnexpectedResult,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RoomError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => RoomError::NotFound(id),
            FrameworkError::Rejected(reason) => RoomError::InvalidRoom(reason),
            other => RoomError::ActorCommunicationError(other.to_string()),
        }
    }
}
