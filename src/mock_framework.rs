//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! mailbox, then drain it with [`expect_create`], [`expect_get`] or
//! [`expect_action`] and answer through the returned responder.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};

/// Creates a client whose requests land on a channel the test controls.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{RoomClient, RoomHandle};
    use crate::domain::Room;
    use crate::room_actor::RoomError;

    #[tokio::test]
    async fn test_snapshot_of_missing_room() {
        let (inner, mut receiver) = create_mock_client::<Room>(10);
        let handle = RoomHandle::new("room_7", "Sala 7", RoomClient::new(inner));

        let task = tokio::spawn(async move { handle.snapshot().await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Room Get");
        assert_eq!(id, "room_7");
        responder.send(Ok(None)).unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            RoomError::NotFound("room_7".to_string())
        );
    }
}
