use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use super::{SystemConfig, SystemError};
use crate::actor_framework::ResourceActor;
use crate::clients::{RoomClient, RoomHandle};
use crate::domain::{Room, RoomCreate};
use crate::registry::Registry;
use crate::room_actor::RoomError;

/// The cinema as a whole: the people registry plus the room actor.
///
/// Responsible for starting the room actor, handing out room handles, and
/// stopping the actor again on shutdown. Must be created inside a tokio
/// runtime.
pub struct CinemaSystem {
    pub registry: Registry,
    pub room_client: RoomClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CinemaSystem {
    #[instrument(name = "cinema_system", skip(config), fields(mailbox_capacity = config.mailbox_capacity))]
    pub fn new(config: &SystemConfig) -> Self {
        let room_id_counter = Arc::new(AtomicU64::new(1));
        let next_room_id = move || {
            let id = room_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("room_{}", id)
        };

        let (room_actor, room_resource_client) = ResourceActor::<Room>::new(config.mailbox_capacity, next_room_id);
        let room_client = RoomClient::new(room_resource_client);
        let room_handle = tokio::spawn(room_actor.run());

        info!("Cinema system started");

        Self {
            registry: Registry::new(),
            room_client,
            handles: vec![room_handle],
        }
    }

    /// Opens a room and returns a handle screenings can be scheduled on.
    #[instrument(skip(self))]
    pub async fn open_room(&self, room: RoomCreate) -> Result<RoomHandle, RoomError> {
        let name = room.name.clone();
        let id = self.room_client.create_room(room).await?;
        info!(room_id = %id, "Room opened");
        Ok(RoomHandle::new(id, name, self.room_client.clone()))
    }

    /// Stops the room actor and waits for it to finish.
    ///
    /// Handles still held elsewhere (screenings, reservations) stay valid as
    /// values but their room requests fail with a communication error.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        if let Err(e) = self.room_client.shutdown().await {
            // Already stopped; the join below reports why.
            error!(error = %e, "Room actor did not accept shutdown");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorPanicked(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
