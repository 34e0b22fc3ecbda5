use std::collections::BTreeSet;
use std::fmt;

/// Seat numbers run from 1 to the room capacity.
pub type SeatNumber = u32;
pub type RoomId = String;

/// A screening room and its seat inventory.
///
/// # Actor Framework
/// Rooms are hosted by a [`ResourceActor`](crate::actor_framework::ResourceActor);
/// see `room_actor` for the [`Entity`](crate::actor_framework::Entity) impl.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub kind: String,
    available: BTreeSet<SeatNumber>,
}

/// Payload for opening a new room.
#[derive(Debug, Clone)]
pub struct RoomCreate {
    pub name: String,
    pub capacity: u32,
    pub kind: String,
}

impl RoomCreate {
    pub fn new(name: impl Into<String>, capacity: u32, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity,
            kind: kind.into(),
        }
    }
}

impl Room {
    /// Creates a room with every seat from 1 to `capacity` available.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            kind: kind.into(),
            available: (1..=capacity).collect(),
        }
    }

    /// Grants all of `seats` or none of them.
    ///
    /// Returns `true` and removes the seats from the available set only when
    /// every requested seat is currently free. Seat numbers outside
    /// `1..=capacity` are never available. An empty request trivially succeeds
    /// and leaves the room unchanged.
    pub fn reserve_seats(&mut self, seats: &BTreeSet<SeatNumber>) -> bool {
        if !seats.is_subset(&self.available) {
            return false;
        }
        for seat in seats {
            self.available.remove(seat);
        }
        true
    }

    pub fn is_available(&self, seat: SeatNumber) -> bool {
        self.available.contains(&seat)
    }

    pub fn available_seats(&self) -> &BTreeSet<SeatNumber> {
        &self.available
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, Capacity: {})", self.name, self.kind, self.capacity)
    }
}
