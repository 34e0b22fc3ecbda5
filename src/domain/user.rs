use std::collections::BTreeSet;
use std::fmt;

use tracing::{info, instrument};

use crate::domain::{Person, Reservation, Screening, SeatNumber};
use crate::room_actor::RoomError;

pub type UserId = String;

/// A registered customer and the reservations they have made.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub person: Person,
    reservations: Vec<Reservation>,
}

impl User {
    pub fn new(id: impl Into<String>, person: Person) -> Self {
        Self {
            id: id.into(),
            person,
            reservations: Vec::new(),
        }
    }

    /// Books `seats` on `screening` for this user.
    ///
    /// Returns `Ok(None)` when any seat is already taken or out of range; the
    /// room is left untouched in that case. The `Err` arm only reports that
    /// the room could not be reached.
    #[instrument(skip(self, screening, seats), fields(user_id = %self.id, screening = %screening))]
    pub async fn reserve_seats(
        &mut self,
        screening: &Screening,
        seats: impl IntoIterator<Item = SeatNumber>,
    ) -> Result<Option<Reservation>, RoomError> {
        let seats: BTreeSet<SeatNumber> = seats.into_iter().collect();

        if !screening.reserve_seats(&seats).await? {
            info!(?seats, "Seats unavailable");
            return Ok(None);
        }

        let reservation = Reservation::new(
            self.id.clone(),
            self.person.name.clone(),
            screening.clone(),
            seats,
        );
        self.reservations.push(reservation.clone());
        info!(count = self.reservations.len(), "Reservation recorded");
        Ok(Some(reservation))
    }

    /// Reservations in the order they were made.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// One line per reservation, oldest first.
    pub fn list_reservations(&self) -> String {
        if self.reservations.is_empty() {
            return "You have no reservations.".to_string();
        }
        self.reservations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}
