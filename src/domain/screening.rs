use std::collections::BTreeSet;
use std::fmt;

use crate::clients::RoomHandle;
use crate::domain::{Movie, SeatNumber};
use crate::room_actor::RoomError;

/// A showing of a movie in a room at a given time.
///
/// The screening only borrows the room through a [`RoomHandle`]; several
/// screenings in the same room draw from the same seat inventory.
#[derive(Debug, Clone)]
pub struct Screening {
    pub movie: Movie,
    pub room: RoomHandle,
    pub showtime: String,
}

impl Screening {
    pub fn new(movie: Movie, room: RoomHandle, showtime: impl Into<String>) -> Self {
        Self {
            movie,
            room,
            showtime: showtime.into(),
        }
    }

    /// Forwards the request to the room. `Ok(false)` means a seat was taken.
    pub async fn reserve_seats(&self, seats: &BTreeSet<SeatNumber>) -> Result<bool, RoomError> {
        self.room.reserve_seats(seats).await
    }
}

impl fmt::Display for Screening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Screening of {} in {} at {}",
            self.movie.title,
            self.room.name(),
            self.showtime
        )
    }
}
