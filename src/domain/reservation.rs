use std::collections::BTreeSet;
use std::fmt;

use crate::domain::{Screening, SeatNumber, UserId};

/// Seats granted to a user for a screening.
///
/// Only built after the room has confirmed every seat, and never changed
/// afterwards, so the fields are read through accessors.
#[derive(Debug, Clone)]
pub struct Reservation {
    user_id: UserId,
    user_name: String,
    screening: Screening,
    seats: BTreeSet<SeatNumber>,
}

impl Reservation {
    pub(crate) fn new(
        user_id: UserId,
        user_name: String,
        screening: Screening,
        seats: BTreeSet<SeatNumber>,
    ) -> Self {
        Self {
            user_id,
            user_name,
            screening,
            seats,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn screening(&self) -> &Screening {
        &self.screening
    }

    pub fn seats(&self) -> &BTreeSet<SeatNumber> {
        &self.seats
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seats: Vec<String> = self.seats.iter().map(|seat| seat.to_string()).collect();
        write!(
            f,
            "Reservation for {} to {} in {}, Seats: [{}]",
            self.user_name,
            self.screening.movie.title,
            self.screening.room.name(),
            seats.join(", ")
        )
    }
}
