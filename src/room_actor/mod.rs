//! Room-specific actor logic: seat reservation actions and their errors.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
