//! Typed clients wrapping the generic actor client.

pub mod room_client;

pub use room_client::*;
