//! Cinema reservations: users and staff, rooms and screenings, and seat
//! bookings that never hand the same seat out twice.
//!
//! Rooms live inside a [`ResourceActor`](actor_framework::ResourceActor), so
//! every seat request for a room is checked and applied as one step even when
//! many tasks book at once.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod registry;
pub mod room_actor;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;
