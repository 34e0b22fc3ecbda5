use super::actions::{RoomAction, RoomActionResult};
use crate::actor_framework::Entity;
use crate::domain::{Room, RoomCreate, RoomId};

impl Entity for Room {
    type Id = RoomId;
    type CreatePayload = RoomCreate;
    type Action = RoomAction;
    type ActionResult = RoomActionResult;

    fn id(&self) -> &RoomId {
        &self.id
    }

    /// Opens a room with every seat free.
    ///
    /// # Arguments
    /// * `id` - Identifier generated by the actor (`room_N`)
    /// * `payload` - Room creation parameters containing name, capacity, and kind
    ///
    /// # Errors
    /// Rejects rooms without seats.
    fn from_create(id: RoomId, payload: RoomCreate) -> Result<Self, String> {
        if payload.capacity == 0 {
            return Err(format!("Room {} must have at least one seat", payload.name));
        }
        Ok(Room::new(id, payload.name, payload.capacity, payload.kind))
    }

    /// Handles room-specific actions.
    ///
    /// # Actions
    /// - `ReserveSeats(seats)`: Grants every seat or none; returns `Reserved(granted)`
    /// - `AvailableSeats`: Returns a copy of the free seats
    ///
    /// # Errors
    /// None. Seat unavailability is a normal outcome (`Reserved(false)`).
    fn handle_action(&mut self, action: RoomAction) -> Result<RoomActionResult, String> {
        match action {
            RoomAction::ReserveSeats(seats) => Ok(RoomActionResult::Reserved(self.reserve_seats(&seats))),
            RoomAction::AvailableSeats => Ok(RoomActionResult::AvailableSeats(self.available_seats().clone())),
        }
    }
}
