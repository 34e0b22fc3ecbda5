//! Plain data types of the cinema: people, rooms, movies, screenings and reservations.

pub mod employee;
pub mod movie;
pub mod person;
pub mod reservation;
pub mod role;
pub mod room;
pub mod screening;
pub mod user;

pub use employee::*;
pub use movie::*;
pub use person::*;
pub use reservation::*;
pub use role::*;
pub use room::*;
pub use screening::*;
pub use user::*;
