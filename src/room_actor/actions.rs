use std::collections::BTreeSet;

use crate::domain::SeatNumber;

/// Custom actions for Room entities.
#[derive(Debug, Clone)]
pub enum RoomAction {
    /// Reserves every listed seat, or none of them.
    ReserveSeats(BTreeSet<SeatNumber>),
    /// Reads the currently free seats without modifying them.
    AvailableSeats,
}

/// Results from RoomActions - variants match 1:1 with RoomAction
#[derive(Debug, Clone, PartialEq)]
pub enum RoomActionResult {
    /// `false` when at least one seat was unavailable
    Reserved(bool),
    AvailableSeats(BTreeSet<SeatNumber>),
}
