use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Room, RoomCreate, RoomId, SeatNumber};
use crate::room_actor::{RoomAction, RoomActionResult, RoomError};

/// Client for interacting with the Room actor.
#[derive(Clone, Debug)]
pub struct RoomClient {
    inner: ResourceClient<Room>,
}

impl RoomClient {
    pub fn new(inner: ResourceClient<Room>) -> Self {
        Self { inner }
    }

    /// Opens a room inside the actor.
    ///
    /// # Errors
    /// `InvalidRoom` when the room has no seats.
    #[instrument(skip(self))]
    pub async fn create_room(&self, room: RoomCreate) -> Result<RoomId, RoomError> {
        debug!("Sending request");
        Ok(self.inner.create(room).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_room(&self, id: RoomId) -> Result<Option<Room>, RoomError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }

    /// Asks the room to grant every seat in `seats`.
    ///
    /// # Arguments
    /// * `id` - Room to book in
    /// * `seats` - Seat numbers requested together
    ///
    /// # Errors
    /// `NotFound` for an unknown room, `ActorCommunicationError` when the actor
    /// is gone. A taken seat is `Ok(false)`.
    #[instrument(skip(self))]
    pub async fn reserve_seats(&self, id: RoomId, seats: BTreeSet<SeatNumber>) -> Result<bool, RoomError> {
        debug!("Sending request");
        match self.inner.perform_action(id, RoomAction::ReserveSeats(seats)).await? {
            RoomActionResult::Reserved(granted) => Ok(granted),
            _ => Err(RoomError::UnexpectedResult),
        }
    }

    #[instrument(skip(self))]
    pub async fn available_seats(&self, id: RoomId) -> Result<BTreeSet<SeatNumber>, RoomError> {
        debug!("Sending request");
        match self.inner.perform_action(id, RoomAction::AvailableSeats).await? {
            RoomActionResult::AvailableSeats(seats) => Ok(seats),
            _ => Err(RoomError::UnexpectedResult),
        }
    }

    /// Stops the room actor once the requests queued before this one are handled.
    pub async fn shutdown(&self) -> Result<(), RoomError> {
        Ok(self.inner.shutdown().await?)
    }
}

/// A room as seen from a screening: its id and name plus a way to reach it.
#[derive(Clone, Debug)]
pub struct RoomHandle {
    id: RoomId,
    name: String,
    client: RoomClient,
}

impl RoomHandle {
    pub fn new(id: impl Into<String>, name: impl Into<String>, client: RoomClient) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            client,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn reserve_seats(&self, seats: &BTreeSet<SeatNumber>) -> Result<bool, RoomError> {
        self.client.reserve_seats(self.id.clone(), seats.clone()).await
    }

    pub async fn available_seats(&self) -> Result<BTreeSet<SeatNumber>, RoomError> {
        self.client.available_seats(self.id.clone()).await
    }

    /// Current state of the room, including its free seats.
    pub async fn snapshot(&self) -> Result<Room, RoomError> {
        self.client
            .get_room(self.id.clone())
            .await?
            .ok_or_else(|| RoomError::NotFound(self.id.clone()))
    }
}
